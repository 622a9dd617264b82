//! Tool failures and their `{"error": ...}` rendering.

use crate::extract::ExtractError;
use crate::travel::UpstreamError;
use crate::types::ErrorResponse;
use serde::Serialize;
use tracing::{debug, error};

const ENCODE_FAILED: &str = r#"{"error": "Failed to encode response."}"#;

/// Every way a tool call can fail. The `Display` text is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// A required argument was missing or blank.
    #[error("{0}")]
    MissingArgument(&'static str),

    /// The upstream request failed or returned a non-2xx status.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The upstream body could not be normalized. The detail is only logged.
    #[error("Invalid response format or missing data from API.")]
    Format(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid invocation context.")]
    InvalidContext,
}

impl ToolError {
    /// Map an upstream failure, logging the raw details.
    pub fn upstream(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Transport(e) => {
                error!("HTTP request failed: {e}");
                Self::Transport(e.to_string())
            }
            UpstreamError::InvalidJson { source, body } => {
                error!("Failed to parse JSON response: {source}");
                debug!("Response content: {body}");
                Self::Format(source.to_string())
            }
        }
    }

    /// Map an extraction failure, logging the detail.
    pub fn extraction(err: ExtractError) -> Self {
        error!("Failed to extract data from response: {err}");
        Self::Format(err.to_string())
    }

    /// Render as the JSON error envelope.
    pub fn to_response(&self) -> String {
        to_json_string(&ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Encode a response envelope. Serialization of the envelope types cannot
/// fail in practice; a fixed error document is returned if it ever does.
pub fn to_json_string<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        error!("Failed to encode response: {e}");
        ENCODE_FAILED.to_string()
    })
}
