//! Bearer token acquisition and background renewal.
//!
//! The token service exchanges a subscription key for a short-lived access
//! token (valid for 10 minutes). [`TokenAuthenticator`] fetches the first
//! token on [`authenticate`](TokenAuthenticator::authenticate) and then keeps
//! a fresh one in its slot by re-issuing every [`TOKEN_RENEWAL_INTERVAL`].
//!
//! Renewal runs as a single sequential loop (`sleep`, then renew), so two
//! renewals are never in flight at once. A failed renewal is logged and the
//! previous token stays in place until the next tick.
//!
//! See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/rest-text-to-speech#authentication>

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_LENGTH;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use zeroize::Zeroizing;

use crate::errors::auth_error::{AuthError, AuthResult};

/// Header carrying the subscription key on the token request.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Delay between token renewals. Tokens expire after 10 minutes.
pub const TOKEN_RENEWAL_INTERVAL: Duration = Duration::from_secs(9 * 60);

/// Format a token as an `Authorization` header value.
#[inline]
pub fn build_bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// Token State
// =============================================================================

/// The token currently held by the authenticator.
#[derive(Clone)]
pub struct TokenState {
    /// Opaque bearer token
    pub token: String,
    /// When the token endpoint handed it out
    pub issued_at: Instant,
}

impl TokenState {
    fn issued_now(token: String) -> Self {
        Self {
            token,
            issued_at: Instant::now(),
        }
    }

    /// Time since the token was issued.
    pub fn age(&self) -> Duration {
        self.issued_at.elapsed()
    }
}

impl std::fmt::Debug for TokenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenState")
            .field("token", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

// =============================================================================
// Token Issuer
// =============================================================================

/// Something that can hand out a fresh bearer token.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Request a new token.
    async fn issue_token(&self) -> AuthResult<String>;
}

/// Issues tokens by POSTing the subscription key to the token endpoint.
pub struct HttpTokenIssuer {
    client: Client,
    endpoint: String,
    api_key: Zeroizing<String>,
    request_counter: AtomicU64,
}

impl HttpTokenIssuer {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: Zeroizing::new(api_key.into()),
            request_counter: AtomicU64::new(0),
        }
    }
}

impl std::fmt::Debug for HttpTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTokenIssuer")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl TokenIssuer for HttpTokenIssuer {
    async fn issue_token(&self) -> AuthResult<String> {
        let request_id = self.request_counter.fetch_add(1, Ordering::Relaxed);
        debug!(request_id = request_id, endpoint = %self.endpoint, "Requesting access token");

        let response = self
            .client
            .post(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, self.api_key.as_str())
            .header(CONTENT_LENGTH, 0)
            .send()
            .await
            .map_err(|e| {
                error!(request_id = request_id, error = %e, "Token request failed");
                AuthError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                request_id = request_id,
                status = %status,
                body = %body,
                "Token endpoint returned error"
            );
            return Err(AuthError::RequestFailed { status, body });
        }

        let token = response
            .text()
            .await
            .map_err(|e| AuthError::Network(format!("Failed to read token body: {e}")))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        debug!(request_id = request_id, "Access token issued");
        Ok(token.to_string())
    }
}

// =============================================================================
// Authenticator
// =============================================================================

struct RenewalTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Holds the current bearer token and keeps it fresh in the background.
///
/// Readers call [`current_token`](Self::current_token), which never blocks;
/// the renewal task swaps a new [`TokenState`] into the slot atomically.
pub struct TokenAuthenticator {
    issuer: Arc<dyn TokenIssuer>,
    state: Arc<ArcSwapOption<TokenState>>,
    renewal_interval: Duration,
    renewal: Mutex<Option<RenewalTask>>,
}

impl TokenAuthenticator {
    pub fn new(issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            issuer,
            state: Arc::new(ArcSwapOption::empty()),
            renewal_interval: TOKEN_RENEWAL_INTERVAL,
            renewal: Mutex::new(None),
        }
    }

    /// Authenticator backed by the HTTP token endpoint.
    pub fn with_http(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTokenIssuer::new(client, endpoint, api_key)))
    }

    /// Override the renewal interval.
    pub fn with_renewal_interval(mut self, interval: Duration) -> Self {
        self.renewal_interval = interval;
        self
    }

    pub fn renewal_interval(&self) -> Duration {
        self.renewal_interval
    }

    /// Fetch a token and start (or restart) the renewal schedule.
    ///
    /// Must be called from within a tokio runtime. On failure the slot is
    /// left untouched and no renewal task is started.
    pub async fn authenticate(&self) -> AuthResult<String> {
        let token = self.issuer.issue_token().await?;
        self.state
            .store(Some(Arc::new(TokenState::issued_now(token.clone()))));
        info!(
            renewal_interval_secs = self.renewal_interval.as_secs(),
            "Authenticated, token renewal scheduled"
        );
        self.start_renewal();
        Ok(token)
    }

    /// The latest token, or [`AuthError::NotReady`] before the first success.
    pub fn current_token(&self) -> AuthResult<String> {
        self.state
            .load()
            .as_ref()
            .map(|state| state.token.clone())
            .ok_or(AuthError::NotReady)
    }

    /// Snapshot of the current token and its issue time.
    pub fn token_state(&self) -> Option<Arc<TokenState>> {
        self.state.load_full()
    }

    pub fn is_ready(&self) -> bool {
        self.state.load().is_some()
    }

    /// Whether a renewal loop is currently scheduled.
    pub fn is_renewing(&self) -> bool {
        self.lock_renewal()
            .as_ref()
            .is_some_and(|task| !task.cancel.is_cancelled() && !task.handle.is_finished())
    }

    /// Stop the renewal loop. The current token stays readable.
    pub fn shutdown(&self) {
        if let Some(task) = self.lock_renewal().take() {
            task.cancel.cancel();
            debug!("Token renewal stopped");
        }
    }

    fn lock_renewal(&self) -> std::sync::MutexGuard<'_, Option<RenewalTask>> {
        self.renewal
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn start_renewal(&self) {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(renewal_loop(
            Arc::clone(&self.issuer),
            Arc::clone(&self.state),
            self.renewal_interval,
            cancel.clone(),
        ));

        let previous = self.lock_renewal().replace(RenewalTask { cancel, handle });
        if let Some(previous) = previous {
            previous.cancel.cancel();
        }
    }
}

impl Drop for TokenAuthenticator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("ready", &self.is_ready())
            .field("renewal_interval", &self.renewal_interval)
            .finish()
    }
}

async fn renewal_loop(
    issuer: Arc<dyn TokenIssuer>,
    state: Arc<ArcSwapOption<TokenState>>,
    interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }

        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            result = issuer.issue_token() => result,
        };

        match result {
            Ok(token) => {
                state.store(Some(Arc::new(TokenState::issued_now(token))));
                debug!("Access token renewed");
            }
            Err(e) if e.is_credential_rejected() => {
                error!(error = %e, "Subscription key rejected during renewal, keeping previous token");
            }
            Err(e) => {
                warn!(error = %e, "Token renewal failed, keeping previous token");
            }
        }
    }
}
