//! REST synthesis client.
//!
//! Sends one SSML document per call and hands back the response body as an
//! [`AudioStream`]. The client holds no token of its own: the caller passes
//! the current bearer token from the authenticator on every call.
//!
//! # Example
//!
//! ```rust,ignore
//! use cognitive_tts::core::tts::{AzureTTSConfig, SynthesisClient, SynthesisRequest, VoiceCatalog};
//! use tokio_util::sync::CancellationToken;
//!
//! let client = SynthesisClient::new(AzureTTSConfig::default())?;
//! let cancel = CancellationToken::new();
//! let stream = client
//!     .synthesize(&SynthesisRequest::new("Hello"), &token, VoiceCatalog::standard(), &cancel)
//!     .await?;
//! let wav = stream.collect(&cancel).await?;
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use futures::stream::{BoxStream, StreamExt};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::config::{
    AudioOutputFormat, AzureTTSConfig, CLIENT_APP_ID, CLIENT_ID, CLIENT_USER_AGENT,
    OUTPUT_FORMAT_HEADER, SSML_CONTENT_TYPE, SynthesisRequest,
};
use super::ssml::SsmlRequestBuilder;
use super::voices::VoiceCatalog;
use crate::core::providers::azure::build_bearer_header;
use crate::core::tts::base::{TTSError, TTSResult};

const APP_ID_HEADER: &str = "X-Search-AppId";
const CLIENT_ID_HEADER: &str = "X-Search-ClientID";

/// Upper bound on the buffer reserved from an announced `Content-Length`.
const MAX_PREALLOCATED_BYTES: usize = 4 * 1024 * 1024;

// =============================================================================
// Audio Stream
// =============================================================================

/// Body of a successful synthesis response.
///
/// Chunks arrive as the server sends them. Dropping the stream closes the
/// underlying connection.
pub struct AudioStream {
    request_id: u64,
    format: AudioOutputFormat,
    content_length: Option<u64>,
    inner: BoxStream<'static, reqwest::Result<Bytes>>,
}

impl AudioStream {
    fn from_response(request_id: u64, format: AudioOutputFormat, response: reqwest::Response) -> Self {
        Self {
            request_id,
            format,
            content_length: response.content_length(),
            inner: response.bytes_stream().boxed(),
        }
    }

    /// Encoding requested for this response.
    pub fn format(&self) -> AudioOutputFormat {
        self.format
    }

    /// Body length announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Next body chunk, or `None` at the end of the body.
    pub async fn next_chunk(&mut self, cancel: &CancellationToken) -> TTSResult<Option<Bytes>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TTSError::Cancelled),
            chunk = self.inner.next() => chunk
                .transpose()
                .map_err(|e| TTSError::Network(format!("Failed to read audio: {e}"))),
        }
    }

    /// Buffer the whole body.
    pub async fn collect(mut self, cancel: &CancellationToken) -> TTSResult<Bytes> {
        let capacity = self
            .content_length
            .and_then(|len| usize::try_from(len).ok())
            .unwrap_or(0)
            .min(MAX_PREALLOCATED_BYTES);
        let mut buffer = BytesMut::with_capacity(capacity);

        while let Some(chunk) = self.next_chunk(cancel).await.inspect_err(|e| {
            debug!(request_id = self.request_id, error = %e, "Audio stream aborted");
        })? {
            buffer.extend_from_slice(&chunk);
        }

        debug!(
            request_id = self.request_id,
            audio_bytes = buffer.len(),
            "Audio stream complete"
        );
        Ok(buffer.freeze())
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("request_id", &self.request_id)
            .field("format", &self.format)
            .field("content_length", &self.content_length)
            .finish()
    }
}

// =============================================================================
// Synthesis Client
// =============================================================================

/// Text-to-speech REST client.
pub struct SynthesisClient {
    config: AzureTTSConfig,
    client: Client,
    /// Request counter for logging
    request_counter: AtomicU64,
}

impl SynthesisClient {
    /// Create a client with its own connection pool.
    pub fn new(config: AzureTTSConfig) -> TTSResult<Self> {
        config.validate().map_err(TTSError::InvalidConfiguration)?;

        let client = Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                TTSError::InvalidConfiguration(format!("Failed to create HTTP client: {e}"))
            })?;

        info!(endpoint = %config.synthesis_url(), "Synthesis client ready");
        Ok(Self::with_client(config, client))
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_client(config: AzureTTSConfig, client: Client) -> Self {
        Self {
            config,
            client,
            request_counter: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &AzureTTSConfig {
        &self.config
    }

    /// Send one synthesis request.
    ///
    /// Cancelling `cancel` before the response headers arrive drops the
    /// in-flight request and returns [`TTSError::Cancelled`].
    pub async fn synthesize(
        &self,
        request: &SynthesisRequest,
        token: &str,
        catalog: &VoiceCatalog,
        cancel: &CancellationToken,
    ) -> TTSResult<AudioStream> {
        if cancel.is_cancelled() {
            return Err(TTSError::Cancelled);
        }
        if request.text.trim().is_empty() {
            return Err(TTSError::InvalidConfiguration(
                "Text must not be empty".to_string(),
            ));
        }

        let voice = catalog.resolve(request.voice);
        let locale = request
            .locale
            .as_deref()
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
            .unwrap_or(voice.locale);

        let ssml = SsmlRequestBuilder::build(
            locale,
            request.gender,
            voice.wire_name,
            &request.text,
            request.pitch_delta_hz,
        )?;

        let request_id = self.request_counter.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(
            request_id = request_id,
            text_len = request.text.len(),
            voice = %request.voice,
            format = %request.output_format,
            "Synthesizing text"
        );

        let send = self
            .client
            .post(self.config.synthesis_url())
            .header(CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(OUTPUT_FORMAT_HEADER, request.output_format.as_str())
            .header(AUTHORIZATION, build_bearer_header(token))
            .header(APP_ID_HEADER, CLIENT_APP_ID)
            .header(CLIENT_ID_HEADER, CLIENT_ID)
            .body(ssml)
            .send();

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(request_id = request_id, "Synthesis cancelled before response");
                return Err(TTSError::Cancelled);
            }
            result = send => result.map_err(|e| {
                error!(request_id = request_id, error = %e, "Synthesis request failed");
                TTSError::Network(format!("Request failed: {e}"))
            })?,
        };

        let status = response.status();
        if !status.is_success() {
            let body = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(request_id = request_id, "Synthesis cancelled while reading error body");
                    return Err(TTSError::Cancelled);
                }
                body = response.text() => body.unwrap_or_default(),
            };
            error!(
                request_id = request_id,
                status = %status,
                body = %body,
                "Synthesis endpoint returned error"
            );
            return Err(TTSError::SynthesisFailed { status, body });
        }

        debug!(request_id = request_id, status = %status, "Synthesis response started");
        Ok(AudioStream::from_response(
            request_id,
            request.output_format,
            response,
        ))
    }
}

impl std::fmt::Debug for SynthesisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisClient")
            .field("config", &self.config)
            .finish()
    }
}
