//! HTTP client for the Minutemart quick-commerce API.
//!
//! Every façade tool maps to one or two calls through this client. The
//! remote API wraps every payload in a `{success, data, message}` envelope
//! and reports business failures with that envelope rather than bare HTTP
//! errors, so the verb helpers here parse the body as JSON regardless of
//! status code and only surface transport or parse problems as [`ApiError`].
//!
//! # Authentication
//!
//! A bearer token captured by `login`/`register` lives in a [`Session`]
//! slot owned by the client instance. One client value is one logical
//! session; there is no process-global credential.

mod addresses;
mod auth;
mod cart;
mod checkout;
mod orders;
mod products;
pub mod session;
pub mod types;

pub use products::ProductFilter;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use minutemart_core::ApiEnvelope;
use session::Session;

/// Errors that can occur when talking to the commerce API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected.
    #[error("parse error: {0}")]
    Parse(String),

    /// Upstream reported a business failure we could not pass through.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl ApiError {
    /// Whether the failure was an inability to reach the server at all.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect() || e.is_timeout())
    }
}

/// Client for the commerce API.
///
/// Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.api_base_url.trim_end_matches('/').to_string(),
                session: Session::new(),
            }),
        })
    }

    /// The session credential slot for this client instance.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// The configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The underlying HTTP client, shared with the image fetcher.
    #[must_use]
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Execute a GET request, returning the raw envelope.
    pub(crate) async fn get_raw(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        self.send(Method::GET, path, query, None).await
    }

    /// Execute a POST request with a JSON body, returning the raw envelope.
    pub(crate) async fn post_raw(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    /// Execute a PUT request with a JSON body, returning the raw envelope.
    pub(crate) async fn put_raw(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    /// Execute a DELETE request, returning the raw envelope.
    pub(crate) async fn delete_raw(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, &[], None).await
    }

    /// Check the API health endpoint.
    ///
    /// Transport failures propagate so the caller can convert them into the
    /// explicit unavailability message the health tool returns.
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get_raw("/health", &[]).await
    }

    /// Parse the typed `data` payload out of a raw envelope.
    ///
    /// Fails with [`ApiError::Upstream`] when the envelope reports failure
    /// and [`ApiError::Parse`] when the payload has an unexpected shape.
    pub(crate) fn data_from_envelope<T: serde::de::DeserializeOwned>(
        envelope: Value,
    ) -> Result<T, ApiError> {
        let envelope: ApiEnvelope<Value> = serde_json::from_value(envelope)
            .map_err(|e| ApiError::Parse(format!("invalid envelope: {e}")))?;
        if !envelope.success {
            return Err(ApiError::Upstream(
                envelope
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        let data = envelope
            .data
            .ok_or_else(|| ApiError::Parse("missing data payload".to_string()))?;
        serde_json::from_value(data).map_err(|e| ApiError::Parse(format!("invalid payload: {e}")))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let mut request = self.inner.http.request(method, &url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(bearer) = self.inner.session.bearer().await {
            request = request.header(reqwest::header::AUTHORIZATION, bearer);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Parse(format!(
                "non-JSON response from {url} (status {status}): {e}"
            ))
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
