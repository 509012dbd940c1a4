pub mod config;
pub mod core;
pub mod errors;

// Re-export commonly used items for convenience
pub use config::{ClientConfig, ConfigError, Credential};
pub use core::*;
pub use errors::app_error::{SpeechError, SpeechResult};
pub use errors::auth_error::{AuthError, AuthResult};
