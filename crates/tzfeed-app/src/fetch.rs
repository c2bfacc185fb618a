//! Upstream feed fetching.
//!
//! A single best-effort attempt: no retry, no timeout override beyond
//! the client default, no partial-result handling. Any non-success
//! outcome surfaces as an upstream-dependency fault.

use thiserror::Error;

/// Errors from fetching the upstream feed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Upstream returned empty content")]
    EmptyBody,
}

/// ## Summary
/// Fetches the raw feed text from the upstream URL.
///
/// ## Errors
/// Returns an error on transport failure, a non-success status, or an
/// empty response body.
pub async fn fetch_feed(url: &str) -> Result<String, FetchError> {
    let response = reqwest::get(url).await?;

    let status = response.status();
    let body = response.text().await?;
    validate_feed(status, body)
}

/// Maps the upstream response to feed text: non-success statuses and
/// blank bodies are both upstream faults.
fn validate_feed(status: reqwest::StatusCode, body: String) -> Result<String, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(body)
}
