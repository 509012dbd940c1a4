pub mod azure;
mod base;

pub use azure::{
    AudioOutputFormat, AudioStream, AzureTTSConfig, CLIENT_APP_ID, CLIENT_ID, CLIENT_USER_AGENT,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, Gender, SsmlRequestBuilder,
    SynthesisClient, SynthesisRequest, VoiceCatalog, VoiceEntry, VoiceName,
};
pub use base::{SsmlError, TTSError, TTSResult};
