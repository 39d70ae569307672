//! Error types for the image studio.
//!
//! The pricing parser never fails; everything here belongs to the AI
//! collaborators and the I/O around them.

use std::time::Duration;

use crate::image::StudioOperation;

/// Longest provider error body kept in an error message.
#[cfg(feature = "google")]
const MAX_ERROR_MESSAGE_LEN: usize = 500;

/// Errors that can occur while editing or generating an image.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// API key missing or invalid.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error body, truncated.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Delay the provider asked for, if it sent one.
        retry_after: Option<Duration>,
    },

    /// Content was blocked by safety filters.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider answered without an image payload.
    #[error("No image was generated in the response.")]
    NoImage,

    /// Response shape did not match what the provider documents.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Network or HTTP error.
    #[cfg(feature = "google")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 data or a data URL.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., reading an input image).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StudioError {
    /// The single message shown to the user when `operation` fails.
    ///
    /// Every variant collapses to the same text; transient and permanent
    /// failures are not told apart.
    pub fn user_message(&self, operation: StudioOperation) -> &'static str {
        match operation {
            StudioOperation::Edit => "Failed to edit image. Please check the console for details.",
            StudioOperation::Generate => {
                "Failed to generate image. Please check the console for details."
            }
        }
    }
}

/// Result type alias for studio operations.
pub type Result<T> = std::result::Result<T, StudioError>;

/// Trims a provider error body to something fit for a log line.
#[cfg(feature = "google")]
pub(crate) fn sanitize_error_message(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= MAX_ERROR_MESSAGE_LEN {
        return text.to_string();
    }
    let truncated: String = text.chars().take(MAX_ERROR_MESSAGE_LEN).collect();
    format!("{truncated}...")
}

/// Reads a `retry-after` header given in seconds.
#[cfg(feature = "google")]
pub(crate) fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
