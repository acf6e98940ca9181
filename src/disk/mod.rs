/**
 * Yandex.Disk REST API client
 *
 * Typed async wrappers over the `/v1/disk` endpoints. Responses are
 * returned as raw JSON, exactly as the service sent them.
 */

pub mod client;

pub use client::DiskClient;

use thiserror::Error;

/// Result type for API client calls
pub type DiskResult<T> = Result<T, DiskApiError>;

/// Failures talking to the remote API
#[derive(Debug, Error)]
pub enum DiskApiError {
    /// Non-success HTTP status
    #[error("Yandex.Disk API error: {status} {status_text} - {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("token is not a valid header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}
