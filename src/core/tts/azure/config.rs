//! Synthesis request and endpoint configuration.
//!
//! # References
//!
//! - [REST API](https://learn.microsoft.com/en-us/azure/ai-services/speech-service/rest-text-to-speech)
//! - [Audio outputs](https://learn.microsoft.com/en-us/azure/ai-services/speech-service/rest-text-to-speech#audio-outputs)

use serde::{Deserialize, Serialize};

use super::voices::VoiceName;
use crate::core::providers::azure::AzureRegion;

// =============================================================================
// Constants
// =============================================================================

/// Client identification headers expected by the synthesis endpoint.
pub const CLIENT_APP_ID: &str = "07D3234E49CE426DAA29772419F436CA";
pub const CLIENT_ID: &str = "1ECFAE91408841A480F00935DC390960";
pub const CLIENT_USER_AGENT: &str = "cognitive-tts";

/// Content type of the request body.
pub const SSML_CONTENT_TYPE: &str = "application/ssml+xml";

/// Header selecting the audio encoding of the response.
pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Audio Output Format
// =============================================================================

/// Audio encodings the synthesis endpoint can return.
///
/// `riff-*` variants carry a WAV header; `raw-*` variants are headerless.
/// Only the RIFF PCM variants can be handed to the WAV decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AudioOutputFormat {
    #[serde(rename = "raw-8khz-8bit-mono-mulaw")]
    Raw8Khz8BitMonoMULaw,
    #[serde(rename = "raw-16khz-16bit-mono-pcm")]
    Raw16Khz16BitMonoPcm,
    #[serde(rename = "riff-8khz-8bit-mono-mulaw")]
    Riff8Khz8BitMonoMULaw,
    /// 16 kHz 16-bit mono PCM in a WAV container
    #[default]
    #[serde(rename = "riff-16khz-16bit-mono-pcm")]
    Riff16Khz16BitMonoPcm,
    #[serde(rename = "ssml-16khz-16bit-mono-silk")]
    Ssml16Khz16BitMonoSilk,
    #[serde(rename = "raw-16khz-16bit-mono-truesilk")]
    Raw16Khz16BitMonoTrueSilk,
    #[serde(rename = "ssml-16khz-16bit-mono-tts")]
    Ssml16Khz16BitMonoTts,
    #[serde(rename = "audio-16khz-128kbitrate-mono-mp3")]
    Audio16Khz128KBitRateMonoMp3,
    #[serde(rename = "audio-16khz-64kbitrate-mono-mp3")]
    Audio16Khz64KBitRateMonoMp3,
    #[serde(rename = "audio-16khz-32kbitrate-mono-mp3")]
    Audio16Khz32KBitRateMonoMp3,
    #[serde(rename = "audio-16khz-16kbps-mono-siren")]
    Audio16Khz16KbpsMonoSiren,
    #[serde(rename = "riff-16khz-16kbps-mono-siren")]
    Riff16Khz16KbpsMonoSiren,
    #[serde(rename = "raw-24khz-16bit-mono-truesilk")]
    Raw24Khz16BitMonoTrueSilk,
    #[serde(rename = "raw-24khz-16bit-mono-pcm")]
    Raw24Khz16BitMonoPcm,
    /// 24 kHz 16-bit mono PCM in a WAV container
    #[serde(rename = "riff-24khz-16bit-mono-pcm")]
    Riff24Khz16BitMonoPcm,
    #[serde(rename = "audio-24khz-48kbitrate-mono-mp3")]
    Audio24Khz48KBitRateMonoMp3,
    #[serde(rename = "audio-24khz-96kbitrate-mono-mp3")]
    Audio24Khz96KBitRateMonoMp3,
    #[serde(rename = "audio-24khz-160kbitrate-mono-mp3")]
    Audio24Khz160KBitRateMonoMp3,
}

impl AudioOutputFormat {
    /// Every format, in declaration order.
    pub const ALL: [AudioOutputFormat; 18] = [
        Self::Raw8Khz8BitMonoMULaw,
        Self::Raw16Khz16BitMonoPcm,
        Self::Riff8Khz8BitMonoMULaw,
        Self::Riff16Khz16BitMonoPcm,
        Self::Ssml16Khz16BitMonoSilk,
        Self::Raw16Khz16BitMonoTrueSilk,
        Self::Ssml16Khz16BitMonoTts,
        Self::Audio16Khz128KBitRateMonoMp3,
        Self::Audio16Khz64KBitRateMonoMp3,
        Self::Audio16Khz32KBitRateMonoMp3,
        Self::Audio16Khz16KbpsMonoSiren,
        Self::Riff16Khz16KbpsMonoSiren,
        Self::Raw24Khz16BitMonoTrueSilk,
        Self::Raw24Khz16BitMonoPcm,
        Self::Riff24Khz16BitMonoPcm,
        Self::Audio24Khz48KBitRateMonoMp3,
        Self::Audio24Khz96KBitRateMonoMp3,
        Self::Audio24Khz160KBitRateMonoMp3,
    ];

    /// Value of the `X-Microsoft-OutputFormat` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw8Khz8BitMonoMULaw => "raw-8khz-8bit-mono-mulaw",
            Self::Raw16Khz16BitMonoPcm => "raw-16khz-16bit-mono-pcm",
            Self::Riff8Khz8BitMonoMULaw => "riff-8khz-8bit-mono-mulaw",
            Self::Riff16Khz16BitMonoPcm => "riff-16khz-16bit-mono-pcm",
            Self::Ssml16Khz16BitMonoSilk => "ssml-16khz-16bit-mono-silk",
            Self::Raw16Khz16BitMonoTrueSilk => "raw-16khz-16bit-mono-truesilk",
            Self::Ssml16Khz16BitMonoTts => "ssml-16khz-16bit-mono-tts",
            Self::Audio16Khz128KBitRateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            Self::Audio16Khz64KBitRateMonoMp3 => "audio-16khz-64kbitrate-mono-mp3",
            Self::Audio16Khz32KBitRateMonoMp3 => "audio-16khz-32kbitrate-mono-mp3",
            Self::Audio16Khz16KbpsMonoSiren => "audio-16khz-16kbps-mono-siren",
            Self::Riff16Khz16KbpsMonoSiren => "riff-16khz-16kbps-mono-siren",
            Self::Raw24Khz16BitMonoTrueSilk => "raw-24khz-16bit-mono-truesilk",
            Self::Raw24Khz16BitMonoPcm => "raw-24khz-16bit-mono-pcm",
            Self::Riff24Khz16BitMonoPcm => "riff-24khz-16bit-mono-pcm",
            Self::Audio24Khz48KBitRateMonoMp3 => "audio-24khz-48kbitrate-mono-mp3",
            Self::Audio24Khz96KBitRateMonoMp3 => "audio-24khz-96kbitrate-mono-mp3",
            Self::Audio24Khz160KBitRateMonoMp3 => "audio-24khz-160kbitrate-mono-mp3",
        }
    }

    /// Whether the payload is 16-bit PCM in a RIFF container.
    pub fn is_riff_pcm(&self) -> bool {
        matches!(
            self,
            Self::Riff16Khz16BitMonoPcm | Self::Riff24Khz16BitMonoPcm
        )
    }

    /// Nominal sample rate of the encoding.
    pub fn sample_rate(&self) -> u32 {
        match self {
            Self::Raw8Khz8BitMonoMULaw | Self::Riff8Khz8BitMonoMULaw => 8000,
            Self::Raw24Khz16BitMonoTrueSilk
            | Self::Raw24Khz16BitMonoPcm
            | Self::Riff24Khz16BitMonoPcm
            | Self::Audio24Khz48KBitRateMonoMp3
            | Self::Audio24Khz96KBitRateMonoMp3
            | Self::Audio24Khz160KBitRateMonoMp3 => 24000,
            _ => 16000,
        }
    }
}

impl std::fmt::Display for AudioOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AudioOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| format!("Unknown output format: {s}"))
    }
}

// =============================================================================
// Gender
// =============================================================================

/// Voice gender announced in the `voice` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Ok(Self::Female),
            "male" | "m" => Ok(Self::Male),
            other => Err(format!("Unknown gender: {other}")),
        }
    }
}

// =============================================================================
// Synthesis Request
// =============================================================================

/// One utterance to synthesize.
///
/// ```rust
/// use cognitive_tts::core::tts::{AudioOutputFormat, Gender, SynthesisRequest, VoiceName};
///
/// let request = SynthesisRequest::new("Hello there")
///     .with_voice(VoiceName::EnGbGeorgeApollo)
///     .with_gender(Gender::Male)
///     .with_pitch_delta(-5)
///     .with_output_format(AudioOutputFormat::Riff24Khz16BitMonoPcm);
/// assert_eq!(request.pitch_delta_hz, -5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    /// `xml:lang` override; the voice's own locale is used when unset.
    pub locale: Option<String>,
    pub voice: VoiceName,
    pub gender: Gender,
    /// Pitch shift in hertz, applied through `prosody`.
    pub pitch_delta_hz: i32,
    pub output_format: AudioOutputFormat,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: None,
            voice: VoiceName::default(),
            gender: Gender::default(),
            pitch_delta_hz: 0,
            output_format: AudioOutputFormat::default(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_voice(mut self, voice: VoiceName) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_pitch_delta(mut self, hz: i32) -> Self {
        self.pitch_delta_hz = hz;
        self
    }

    pub fn with_output_format(mut self, format: AudioOutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

// =============================================================================
// Endpoint Configuration
// =============================================================================

/// Where and how the synthesis client talks to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureTTSConfig {
    pub region: AzureRegion,
    /// Replaces the region-derived synthesis URL when set.
    pub endpoint: Option<String>,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for AzureTTSConfig {
    fn default() -> Self {
        Self {
            region: AzureRegion::default(),
            endpoint: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl AzureTTSConfig {
    pub fn with_region(region: AzureRegion) -> Self {
        Self {
            region,
            ..Default::default()
        }
    }

    /// URL the SSML is POSTed to.
    pub fn synthesis_url(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| self.region.tts_rest_url())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.region.as_str().is_empty() {
            return Err("Region must not be empty".to_string());
        }

        if let Some(endpoint) = &self.endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(format!("Synthesis endpoint must be an http(s) URL: {endpoint}"));
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than zero".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("Connect timeout must be greater than zero".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
