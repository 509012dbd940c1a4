//! Cognitive Services text-to-speech over REST.
//!
//! - [`config`]: output formats, gender, request and endpoint settings
//! - [`voices`]: the static voice table
//! - [`ssml`]: SSML request encoding
//! - [`provider`]: the HTTP client and response stream

mod config;
mod provider;
mod ssml;
mod voices;


pub use config::{
    AudioOutputFormat, AzureTTSConfig, CLIENT_APP_ID, CLIENT_ID, CLIENT_USER_AGENT,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, Gender, OUTPUT_FORMAT_HEADER,
    SSML_CONTENT_TYPE, SynthesisRequest,
};
pub use provider::{AudioStream, SynthesisClient};
pub use ssml::{SSML_NAMESPACE, SsmlRequestBuilder};
pub use voices::{VoiceCatalog, VoiceEntry, VoiceName};
