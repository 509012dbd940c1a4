//! Raw environment variable snapshot.

use std::env;

pub const SUBSCRIPTION_KEY_VAR: &str = "AZURE_SPEECH_SUBSCRIPTION_KEY";
pub const REGION_VAR: &str = "AZURE_SPEECH_REGION";
pub const TOKEN_ENDPOINT_VAR: &str = "AZURE_TTS_TOKEN_ENDPOINT";
pub const TTS_ENDPOINT_VAR: &str = "AZURE_TTS_ENDPOINT";
pub const OUTPUT_FORMAT_VAR: &str = "AZURE_TTS_OUTPUT_FORMAT";
pub const VOICE_VAR: &str = "AZURE_TTS_VOICE";
pub const RENEWAL_INTERVAL_VAR: &str = "TOKEN_RENEWAL_INTERVAL_SECS";
pub const REQUEST_TIMEOUT_VAR: &str = "TTS_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "TTS_CONNECT_TIMEOUT_SECS";

/// Every variable the client reads, unparsed. Empty values count as unset.
#[derive(Debug, Default)]
pub(super) struct EnvConfig {
    pub subscription_key: Option<String>,
    pub region: Option<String>,
    pub token_endpoint: Option<String>,
    pub tts_endpoint: Option<String>,
    pub output_format: Option<String>,
    pub voice: Option<String>,
    pub renewal_interval_secs: Option<String>,
    pub request_timeout_secs: Option<String>,
    pub connect_timeout_secs: Option<String>,
}

impl EnvConfig {
    pub fn load() -> Self {
        Self {
            subscription_key: var(SUBSCRIPTION_KEY_VAR),
            region: var(REGION_VAR),
            token_endpoint: var(TOKEN_ENDPOINT_VAR),
            tts_endpoint: var(TTS_ENDPOINT_VAR),
            output_format: var(OUTPUT_FORMAT_VAR),
            voice: var(VOICE_VAR),
            renewal_interval_secs: var(RENEWAL_INTERVAL_VAR),
            request_timeout_secs: var(REQUEST_TIMEOUT_VAR),
            connect_timeout_secs: var(CONNECT_TIMEOUT_VAR),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
