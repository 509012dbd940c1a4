pub mod audio;
pub mod providers;
pub mod speech_manager;
pub mod tts;

// Re-export commonly used types for convenience
pub use audio::{
    AudioBuffer, DecodeError, PlaybackAdapter, PlaybackError, WavFileSink, WavPcmDecoder,
};

pub use providers::azure::{AzureRegion, TokenAuthenticator, TokenIssuer, TokenState};

pub use speech_manager::SpeechManager;

pub use tts::{
    AudioOutputFormat, AudioStream, AzureTTSConfig, Gender, SsmlError, SsmlRequestBuilder,
    SynthesisClient, SynthesisRequest, TTSError, TTSResult, VoiceCatalog, VoiceName,
};
