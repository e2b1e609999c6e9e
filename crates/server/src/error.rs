use thiserror::Error;

use crate::api::ApiError;

/// Errors surfaced by tool execution and the serving loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Whether the failure maps to a JSON-RPC invalid-params error rather
    /// than a tool-level failure result.
    #[must_use]
    pub fn is_invalid_params(&self) -> bool {
        matches!(self, Self::InvalidParams(_))
    }
}
