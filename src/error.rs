//! Error handling for the Download Station client.
//!
//! This module provides the single [`Error`] enum returned by every fallible
//! operation of the crate. Hard failures (authentication, transport, malformed
//! payloads, polling bounds) are errors; soft failures reported by the remote
//! service with `success == false` are not, they surface as `Ok(false)` or
//! `Ok(None)` from the task operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can happen when talking to a Download Station.
#[derive(Error, Debug)]
pub enum Error {
    /// The login call reported a failure.
    ///
    /// Carries the raw error payload returned by the station so callers can
    /// inspect the remote error code.
    #[error("Authentication unsuccessful: {payload}")]
    Authentication {
        /// Raw JSON body of the failed login response.
        payload: serde_json::Value,
    },

    /// A logical endpoint name has no entry in the registry.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// The requested API version is outside the range the endpoint supports.
    #[error("{endpoint} does not support version {version} (supported {min}..={max})")]
    UnsupportedVersion {
        endpoint: &'static str,
        version: u32,
        min: u32,
        max: u32,
    },

    /// A BT search could not be started.
    #[error("Problem with search: {0}")]
    SearchStart(String),

    /// The response was missing expected fields or could not be decoded.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The station answered with a non-success status and no JSON body.
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The base URL of the station could not be composed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A polling workflow ran past its deadline.
    #[error("Operation timed out: {operation}")]
    Timeout { operation: String },

    /// A polling workflow was cancelled by its caller.
    #[error("Operation cancelled: {operation}")]
    Cancelled { operation: String },

    /// Error from the middleware stack wrapping the HTTP client.
    #[error("Transport error")]
    Transport {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

impl Error {
    /// Whether the error comes from the network layer rather than from the
    /// station's application-level answer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Reqwest { .. } | Error::Http { .. }
        )
    }
}

/// Result type alias for operations that can fail with a Download Station error.
pub type Result<T> = std::result::Result<T, Error>;
