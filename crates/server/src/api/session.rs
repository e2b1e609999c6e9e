//! Per-client session credential.
//!
//! The token slot is an explicit value owned by the
//! [`ApiClient`](super::ApiClient) instance, so callers that need isolated
//! sessions construct separate clients. Within one client, a later login
//! overwrites the earlier token (last write wins).

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

/// Holds at most one bearer credential for the lifetime of the client.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<SecretString>>,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a bearer token, replacing any previous one.
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(SecretString::from(token.into()));
    }

    /// Whether a credential is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Render the `Authorization` header value, if logged in.
    pub(crate) async fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| format!("Bearer {}", t.expose_secret()))
    }
}
