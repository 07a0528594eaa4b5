//! Error types for the marketing API client.
//!
//! # Design
//! The client does not classify failures. A transport failure is carried as
//! the transport's own error, a non-2xx response keeps its raw status and
//! body, and envelope `code` values are never interpreted here.

use thiserror::Error;

/// Boxed error produced by an injected `Transport`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `MarketingClient` and `Gateway`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the round-trip.
    #[error("transport failed: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not a valid envelope for the expected payload.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors raised while loading `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}
