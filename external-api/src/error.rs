//! Error types for the external API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. `Transport` covers connect and read failures,
//! which exist here because the client owns the round-trip.

use std::fmt;

/// Errors returned by `ExternalApiClient` operations.
#[derive(Debug)]
pub enum ExternalApiError {
    /// The server returned 404 — the requested resource does not exist.
    NotFound,

    /// The server returned an unexpected status other than 404.
    Http { status: u16, body: String },

    /// The request could not be sent or the response could not be read.
    Transport(String),

    /// The response body could not be deserialized into the expected shape.
    Decode(String),

    /// The request payload could not be serialized to JSON.
    Encode(String),
}

impl fmt::Display for ExternalApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalApiError::NotFound => write!(f, "resource not found"),
            ExternalApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ExternalApiError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
            ExternalApiError::Decode(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ExternalApiError::Encode(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ExternalApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = ExternalApiError::Http {
            status: 503,
            body: "down for maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: down for maintenance");
    }

    #[test]
    fn not_found_display() {
        assert_eq!(ExternalApiError::NotFound.to_string(), "resource not found");
    }
}
