//! Authentication endpoints.

use serde_json::{Value, json};
use tracing::debug;

use super::types::AuthData;
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Login and capture the bearer token into this client's session.
    ///
    /// The upstream envelope is returned unchanged either way; only a
    /// successful envelope carrying a token mutates the session slot.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let envelope = self
            .post_raw("/auth/login", &json!({"email": email, "password": password}))
            .await?;
        self.capture_token(&envelope).await;
        Ok(envelope)
    }

    /// Register a new account and capture the bearer token on success.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        phone: &str,
    ) -> Result<Value, ApiError> {
        let envelope = self
            .post_raw(
                "/auth/register",
                &json!({"email": email, "password": password, "name": name, "phone": phone}),
            )
            .await?;
        self.capture_token(&envelope).await;
        Ok(envelope)
    }

    /// Fetch the currently logged-in user's profile.
    pub async fn current_user(&self) -> Result<Value, ApiError> {
        self.get_raw("/auth/me", &[]).await
    }

    async fn capture_token(&self, envelope: &Value) {
        if envelope["success"] != true {
            return;
        }
        let Ok(auth) = Self::data_from_envelope::<AuthData>(envelope.clone()) else {
            return;
        };
        if let Some(token) = auth.token {
            debug!("captured session token from auth response");
            self.session().set_token(token).await;
        }
    }
}
