//! Client configuration
//!
//! Configuration comes from environment variables (optionally seeded from a
//! `.env` file at startup) and an optional YAML file.
//! Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `utils`: Value parsing helpers
//!
//! # Example
//! ```rust,no_run
//! use cognitive_tts::config::ClientConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ClientConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallback
//! let config = ClientConfig::from_file(&PathBuf::from("config.yaml"))?;
//! println!("Synthesizing in {}", config.credential.region);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::Duration;

use crate::core::providers::azure::{AzureRegion, TOKEN_RENEWAL_INTERVAL};
use crate::core::tts::{
    AudioOutputFormat, AzureTTSConfig, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, VoiceName,
};

mod env;
mod utils;
mod yaml;

pub use env::{
    CONNECT_TIMEOUT_VAR, OUTPUT_FORMAT_VAR, REGION_VAR, RENEWAL_INTERVAL_VAR,
    REQUEST_TIMEOUT_VAR, SUBSCRIPTION_KEY_VAR, TOKEN_ENDPOINT_VAR, TTS_ENDPOINT_VAR, VOICE_VAR,
};
pub use yaml::YamlConfig;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },

    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Parse(String),
}

// =============================================================================
// Credential
// =============================================================================

/// Subscription key and the region it belongs to.
///
/// The key is wiped from memory when the credential is dropped and never
/// appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub api_key: String,
    pub region: AzureRegion,
}

impl Credential {
    pub fn new(api_key: impl Into<String>, region: AzureRegion) -> Self {
        Self {
            api_key: api_key.into(),
            region,
        }
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.api_key.zeroize();
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"[REDACTED]")
            .field("region", &self.region)
            .finish()
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Everything needed to build a [`SpeechManager`](crate::SpeechManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub credential: Credential,
    /// Replaces the region-derived token URL when set
    pub token_endpoint: Option<String>,
    /// Replaces the region-derived synthesis URL when set
    pub synthesis_endpoint: Option<String>,
    pub output_format: AudioOutputFormat,
    pub default_voice: VoiceName,
    pub renewal_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the credential.
    pub fn new(api_key: impl Into<String>, region: AzureRegion) -> Self {
        Self {
            credential: Credential::new(api_key, region),
            token_endpoint: None,
            synthesis_endpoint: None,
            output_format: AudioOutputFormat::default(),
            default_voice: VoiceName::default(),
            renewal_interval_secs: TOKEN_RENEWAL_INTERVAL.as_secs(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Load from environment variables only.
    ///
    /// `.env` is not read here; the binary loads it at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::merge(env::EnvConfig::load(), None)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file, falling back to environment variables for anything
    /// the file leaves out.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = YamlConfig::from_file(path)?;
        let config = Self::merge(env::EnvConfig::load(), Some(yaml))?;
        config.validate()?;
        Ok(config)
    }

    fn merge(env: env::EnvConfig, yaml: Option<YamlConfig>) -> Result<Self, ConfigError> {
        let yaml = yaml.unwrap_or_default();
        let azure = yaml.azure.unwrap_or_default();
        let synthesis = yaml.synthesis.unwrap_or_default();
        let auth = yaml.auth.unwrap_or_default();

        let api_key = azure
            .subscription_key
            .or(env.subscription_key)
            .ok_or_else(|| ConfigError::Missing(SUBSCRIPTION_KEY_VAR.to_string()))?;

        let region = azure
            .region
            .or(env.region)
            .map(|region| region.parse::<AzureRegion>().unwrap_or_default())
            .unwrap_or_default();

        let mut config = Self::new(api_key, region);
        config.token_endpoint = azure.token_endpoint.or(env.token_endpoint);
        config.synthesis_endpoint = azure.tts_endpoint.or(env.tts_endpoint);

        if let Some(format) = synthesis.output_format.or(env.output_format) {
            config.output_format = utils::parse_with(OUTPUT_FORMAT_VAR, &format)?;
        }
        if let Some(voice) = synthesis.voice.or(env.voice) {
            config.default_voice = utils::parse_with(VOICE_VAR, &voice)?;
        }

        if let Some(secs) = auth.renewal_interval_secs {
            config.renewal_interval_secs = secs;
        } else if let Some(raw) = env.renewal_interval_secs {
            config.renewal_interval_secs = utils::parse_secs(RENEWAL_INTERVAL_VAR, &raw)?;
        }
        if let Some(secs) = synthesis.request_timeout_secs {
            config.request_timeout_secs = secs;
        } else if let Some(raw) = env.request_timeout_secs {
            config.request_timeout_secs = utils::parse_secs(REQUEST_TIMEOUT_VAR, &raw)?;
        }
        if let Some(secs) = synthesis.connect_timeout_secs {
            config.connect_timeout_secs = secs;
        } else if let Some(raw) = env.connect_timeout_secs {
            config.connect_timeout_secs = utils::parse_secs(CONNECT_TIMEOUT_VAR, &raw)?;
        }

        Ok(config)
    }

    /// Reject values no request could succeed with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credential.api_key.trim().is_empty() {
            return Err(ConfigError::Missing(SUBSCRIPTION_KEY_VAR.to_string()));
        }
        if self.credential.region.as_str().trim().is_empty() {
            return Err(ConfigError::Missing(REGION_VAR.to_string()));
        }
        if self.renewal_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                key: RENEWAL_INTERVAL_VAR.to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        self.tts_config()
            .validate()
            .map_err(|message| ConfigError::Invalid {
                key: "synthesis".to_string(),
                message,
            })
    }

    /// Token issuing URL.
    pub fn token_endpoint_url(&self) -> String {
        self.token_endpoint
            .clone()
            .unwrap_or_else(|| self.credential.region.token_endpoint())
    }

    pub fn renewal_interval(&self) -> Duration {
        Duration::from_secs(self.renewal_interval_secs)
    }

    /// Settings for the synthesis client.
    pub fn tts_config(&self) -> AzureTTSConfig {
        AzureTTSConfig {
            region: self.credential.region.clone(),
            endpoint: self.synthesis_endpoint.clone(),
            request_timeout_secs: self.request_timeout_secs,
            connect_timeout_secs: self.connect_timeout_secs,
        }
    }
}
