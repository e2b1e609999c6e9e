//! The upstream API response envelope.
//!
//! Every endpoint of the commerce API wraps its payload in
//! `{"success": bool, "data": ..., "message": ...}`. Pass-through tools
//! forward the envelope unchanged; reshaping tools deserialize `data`
//! into typed structures.

use serde::{Deserialize, Serialize};

/// Generic `{success, data, message}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the upstream call succeeded.
    #[serde(default)]
    pub success: bool,
    /// The payload, present on success (and sometimes on failure).
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message, usually present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// A failure envelope carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

}
