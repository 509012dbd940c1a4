use reqwest::StatusCode;

/// Errors raised while obtaining or renewing the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No token has been issued yet; `authenticate` has not completed.
    #[error("Authentication has not completed, no token available")]
    NotReady,

    /// The token endpoint answered with a non-success status.
    #[error("Token request failed ({status}): {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// The token endpoint could not be reached or the body could not be read.
    #[error("Token request network error: {0}")]
    Network(String),

    /// The token endpoint answered 2xx with an empty body.
    #[error("Token endpoint returned an empty token")]
    EmptyToken,
}

impl AuthError {
    /// Whether the failure came from the credential itself rather than transport.
    ///
    /// 401 and 403 mean the subscription key is wrong or the resource is
    /// disabled, so retrying on the next renewal tick will not help.
    pub fn is_credential_rejected(&self) -> bool {
        matches!(
            self,
            Self::RequestFailed { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Result type for token operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejected_statuses() {
        let unauthorized = AuthError::RequestFailed {
            status: StatusCode::UNAUTHORIZED,
            body: "bad key".to_string(),
        };
        assert!(unauthorized.is_credential_rejected());

        let forbidden = AuthError::RequestFailed {
            status: StatusCode::FORBIDDEN,
            body: String::new(),
        };
        assert!(forbidden.is_credential_rejected());
    }

    #[test]
    fn test_transient_errors_are_not_credential_rejections() {
        let server_error = AuthError::RequestFailed {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: String::new(),
        };
        assert!(!server_error.is_credential_rejected());
        assert!(!AuthError::Network("connection reset".to_string()).is_credential_rejected());
        assert!(!AuthError::NotReady.is_credential_rejected());
    }

    #[test]
    fn test_error_messages() {
        let err = AuthError::RequestFailed {
            status: StatusCode::UNAUTHORIZED,
            body: "Access denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Access denied"));
        assert_eq!(
            AuthError::NotReady.to_string(),
            "Authentication has not completed, no token available"
        );
    }
}
