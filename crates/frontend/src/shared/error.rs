//! Errors of frontend-backend calls
//!
//! `Display` output is shown to the user and forwarded to the client log,
//! so it never contains raw response dumps longer than the backend message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build an error from a non-2xx response.
    ///
    /// The backend answers errors with `{"error": {"message": ..}}` or
    /// `{"message": ..}`; anything else falls back to the status code.
    pub fn from_http(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error: {}", status));

        ApiError::Http { status, message }
    }
}
