use serde::Deserialize;
use std::path::Path;

use super::ConfigError;

/// Complete YAML configuration structure
///
/// All fields are optional; anything left out falls back to the environment
/// and then to defaults.
///
/// # Example YAML structure
/// ```yaml
/// azure:
///   subscription_key: "your-subscription-key"
///   region: "westus"
///   token_endpoint: "https://westus.api.cognitive.microsoft.com/sts/v1.0/issueToken"
///   tts_endpoint: "https://westus.tts.speech.microsoft.com/cognitiveservices/v1"
///
/// synthesis:
///   output_format: "riff-24khz-16bit-mono-pcm"
///   voice: "enUSJessaRUS"
///   request_timeout_secs: 60
///   connect_timeout_secs: 10
///
/// auth:
///   renewal_interval_secs: 540
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub azure: Option<AzureYaml>,
    pub synthesis: Option<SynthesisYaml>,
    pub auth: Option<AuthYaml>,
}

/// Subscription and endpoint settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AzureYaml {
    pub subscription_key: Option<String>,
    pub region: Option<String>,
    pub token_endpoint: Option<String>,
    pub tts_endpoint: Option<String>,
}

/// Synthesis request defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SynthesisYaml {
    /// Wire string, e.g. `riff-16khz-16bit-mono-pcm`
    pub output_format: Option<String>,
    /// Voice identifier or full voice name
    pub voice: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthYaml {
    pub renewal_interval_secs: Option<u64>,
}

impl YamlConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Read(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse YAML config: {e}")))
    }
}
