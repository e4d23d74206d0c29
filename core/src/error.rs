//! Error types for the heroes API client.
//!
//! # Design
//! The variants record where a request went wrong, but `HeroService` folds
//! every one of them into the same fallback path and only ever shows their
//! `Display` text. `Transport` carries the transport's message verbatim.

/// Errors produced while building, executing, or parsing a hero request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Http failure response for {url}: {status} {reason}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("Http failure during parsing for {url}: {message}")]
    Deserialization { url: String, message: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build an `HttpStatus` error, filling in the canonical reason phrase.
    pub fn http_status(url: &str, status: u16) -> Self {
        let reason = ureq::http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown Error");
        ApiError::HttpStatus {
            url: url.to_string(),
            status,
            reason: reason.to_string(),
        }
    }
}
