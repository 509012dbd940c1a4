use reqwest::StatusCode;

/// Errors raised while encoding an SSML document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SsmlError {
    /// The XML writer rejected an event.
    #[error("Failed to write SSML: {0}")]
    Write(String),

    /// XML 1.0 cannot represent this character, even escaped.
    #[error("Text contains a character XML cannot represent: U+{0:04X}")]
    InvalidCharacter(u32),
}

/// Errors raised by a synthesis request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TTSError {
    /// The synthesis endpoint answered with a non-success status.
    #[error("Synthesis failed ({status}): {body}")]
    SynthesisFailed { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(String),

    /// The caller cancelled the request before it completed.
    #[error("Synthesis cancelled")]
    Cancelled,

    #[error(transparent)]
    Ssml(#[from] SsmlError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl TTSError {
    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::SynthesisFailed { status, .. } if *status == StatusCode::UNAUTHORIZED
        )
    }
}

/// Result type for synthesis operations
pub type TTSResult<T> = Result<T, TTSError>;
