//! End-to-end speak pipeline.
//!
//! [`SpeechManager`] ties the pieces together: it reads the current token,
//! sends the synthesis request, buffers the response, decodes it and hands
//! the samples to the playback adapter. Every failure is returned to the
//! caller; nothing here panics or touches the token slot on error.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::core::audio::{AudioBuffer, PlaybackAdapter, WavPcmDecoder};
use crate::core::providers::azure::TokenAuthenticator;
use crate::core::tts::{
    CLIENT_USER_AGENT, SynthesisClient, SynthesisRequest, TTSError, VoiceCatalog,
};
use crate::errors::app_error::{SpeechError, SpeechResult};

/// Orchestrates authenticate → synthesize → decode → play.
pub struct SpeechManager {
    authenticator: Arc<TokenAuthenticator>,
    client: SynthesisClient,
    catalog: &'static VoiceCatalog,
    playback: Arc<dyn PlaybackAdapter>,
}

impl SpeechManager {
    pub fn new(
        authenticator: Arc<TokenAuthenticator>,
        client: SynthesisClient,
        playback: Arc<dyn PlaybackAdapter>,
    ) -> Self {
        Self {
            authenticator,
            client,
            catalog: VoiceCatalog::standard(),
            playback,
        }
    }

    /// Build the authenticator and synthesis client from configuration.
    ///
    /// Both share one connection pool. Call [`start`](Self::start) before
    /// speaking.
    pub fn from_config(
        config: &ClientConfig,
        playback: Arc<dyn PlaybackAdapter>,
    ) -> SpeechResult<Self> {
        let tts_config = config.tts_config();
        tts_config
            .validate()
            .map_err(TTSError::InvalidConfiguration)?;

        let http = Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                TTSError::InvalidConfiguration(format!("Failed to create HTTP client: {e}"))
            })?;

        let authenticator = TokenAuthenticator::with_http(
            http.clone(),
            config.token_endpoint_url(),
            config.credential.api_key.as_str(),
        )
        .with_renewal_interval(config.renewal_interval());

        Ok(Self::new(
            Arc::new(authenticator),
            SynthesisClient::with_client(tts_config, http),
            playback,
        ))
    }

    /// Fetch the first token and start background renewal.
    pub async fn start(&self) -> SpeechResult<()> {
        self.authenticator.authenticate().await?;
        info!("Speech manager ready");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.authenticator.is_ready()
    }

    pub fn authenticator(&self) -> &Arc<TokenAuthenticator> {
        &self.authenticator
    }

    pub fn client(&self) -> &SynthesisClient {
        &self.client
    }

    /// Synthesize and decode without playing.
    pub async fn synthesize_audio(
        &self,
        request: &SynthesisRequest,
        cancel: &CancellationToken,
    ) -> SpeechResult<AudioBuffer> {
        if !request.output_format.is_riff_pcm() {
            return Err(SpeechError::UnsupportedFormat(request.output_format));
        }

        let token = self.authenticator.current_token()?;
        let stream = self
            .client
            .synthesize(request, &token, self.catalog, cancel)
            .await
            .inspect_err(|e| {
                if e.is_unauthorized() {
                    warn!("Synthesis endpoint rejected the bearer token");
                }
            })?;
        let bytes = stream.collect(cancel).await?;

        let audio = WavPcmDecoder::decode(&bytes).inspect_err(|e| {
            warn!(error = %e, audio_bytes = bytes.len(), "Failed to decode synthesized audio");
        })?;

        // The WAV header wins over the requested format.
        if audio.sample_rate != request.output_format.sample_rate() {
            warn!(
                requested = request.output_format.sample_rate(),
                received = audio.sample_rate,
                "Synthesized audio sample rate differs from requested format"
            );
        }

        debug!(
            samples = audio.len(),
            sample_rate = audio.sample_rate,
            "Synthesized audio decoded"
        );
        Ok(audio)
    }

    /// Synthesize `request` and hand the decoded audio to the playback adapter.
    ///
    /// Returns the playback duration on success.
    pub async fn speak(
        &self,
        request: &SynthesisRequest,
        cancel: &CancellationToken,
    ) -> SpeechResult<Duration> {
        let audio = self.synthesize_audio(request, cancel).await?;
        let duration = audio.duration();
        self.playback.play(audio).await?;
        Ok(duration)
    }

    /// Stop background token renewal.
    pub fn shutdown(&self) {
        self.authenticator.shutdown();
    }
}

impl std::fmt::Debug for SpeechManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechManager")
            .field("authenticator", &self.authenticator)
            .field("client", &self.client)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::PlaybackError;
    use crate::core::providers::azure::AzureRegion;
    use crate::core::tts::AudioOutputFormat;
    use crate::errors::auth_error::AuthError;
    use async_trait::async_trait;

    struct NullPlayback;

    #[async_trait]
    impl PlaybackAdapter for NullPlayback {
        async fn play(&self, _audio: AudioBuffer) -> Result<(), PlaybackError> {
            Ok(())
        }
    }

    fn manager() -> SpeechManager {
        let config = ClientConfig::new("key", AzureRegion::WestUS);
        SpeechManager::from_config(&config, Arc::new(NullPlayback)).unwrap()
    }

    #[tokio::test]
    async fn test_not_ready_before_start() {
        let manager = manager();
        assert!(!manager.is_ready());

        let err = manager
            .speak(&SynthesisRequest::new("Hi"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SpeechError::Auth(AuthError::NotReady)));
    }

    #[tokio::test]
    async fn test_non_pcm_format_rejected_before_request() {
        let manager = manager();
        let request = SynthesisRequest::new("Hi")
            .with_output_format(AudioOutputFormat::Audio16Khz32KBitRateMonoMp3);

        let err = manager
            .synthesize_audio(&request, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SpeechError::UnsupportedFormat(AudioOutputFormat::Audio16Khz32KBitRateMonoMp3)
        ));
    }

    #[test]
    fn test_from_config_rejects_bad_endpoint() {
        let mut config = ClientConfig::new("key", AzureRegion::WestUS);
        config.synthesis_endpoint = Some("nope".to_string());
        assert!(matches!(
            SpeechManager::from_config(&config, Arc::new(NullPlayback)),
            Err(SpeechError::Synthesis(TTSError::InvalidConfiguration(_)))
        ));
    }
}
