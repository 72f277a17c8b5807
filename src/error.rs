//! Error types for data-service calls and form submission.

use crate::models::EventId;
use thiserror::Error;

/// Failures of a single data-service call. None of them is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Event not found: {0}")]
    NotFound(EventId),
}

impl ApiError {
    /// Text for the toast description. A non-empty error body from the
    /// service wins over the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { body, .. } if !body.trim().is_empty() => {
                extract_message(body).unwrap_or_else(|| body.trim().to_string())
            }
            ApiError::Status { status, .. } => format!("{} Status: {}", fallback, status),
            _ => fallback.to_string(),
        }
    }
}

/// `{"message": "..."}` bodies carry their text in `message`.
fn extract_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("message")
        .and_then(|v| v.as_str())
        .map(String::from)
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Required fields left empty on submit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill in: {}", .missing.join(", "))]
pub struct FormError {
    pub missing: Vec<&'static str>,
}
