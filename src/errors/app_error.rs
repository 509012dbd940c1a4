//! Error type for the end-to-end speak pipeline.

use thiserror::Error;

use crate::core::audio::{DecodeError, PlaybackError};
use crate::core::tts::{AudioOutputFormat, TTSError};
use crate::errors::auth_error::AuthError;

/// Result type for pipeline operations
pub type SpeechResult<T> = Result<T, SpeechError>;

/// Failure of one speak attempt.
///
/// None of these variants affect the stored token: a failed attempt can be
/// followed by another one straight away.
#[derive(Error, Debug)]
pub enum SpeechError {
    // ─────────────────────────────────────────────────────────────────────────────
    // Stage Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Synthesis(#[from] TTSError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    // ─────────────────────────────────────────────────────────────────────────────
    // Pipeline Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// The requested encoding cannot be decoded into samples.
    #[error("Output format '{0}' is not RIFF PCM and cannot be decoded")]
    UnsupportedFormat(AudioOutputFormat),
}

impl SpeechError {
    /// Whether the attempt was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Synthesis(TTSError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_keep_messages() {
        let err: SpeechError = AuthError::NotReady.into();
        assert_eq!(err.to_string(), AuthError::NotReady.to_string());

        let err: SpeechError = DecodeError::NoDataChunk.into();
        assert!(matches!(err, SpeechError::Decode(DecodeError::NoDataChunk)));
    }

    #[test]
    fn test_cancelled() {
        assert!(SpeechError::from(TTSError::Cancelled).is_cancelled());
        assert!(!SpeechError::UnsupportedFormat(AudioOutputFormat::Audio16Khz32KBitRateMonoMp3)
            .is_cancelled());
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = SpeechError::UnsupportedFormat(AudioOutputFormat::Raw16Khz16BitMonoPcm);
        assert!(err.to_string().contains("raw-16khz-16bit-mono-pcm"));
    }
}
