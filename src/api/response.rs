//! Response shapes returned by the dispatcher.

use crate::error::{Error, Result};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

/// Undecoded answer of the station: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body.
    pub body: String,
}

impl RawResponse {
    /// Creates a new [`RawResponse`].
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the HTTP status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decodes the body as a Download Station envelope.
    ///
    /// `data` is only decoded into `T` when the envelope reports success.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] when the status is not a success and the body is not
    ///   an envelope.
    /// - [`Error::MalformedResponse`] when a successful answer cannot be
    ///   decoded or lacks the `success` flag.
    pub fn json<T: DeserializeOwned>(&self) -> Result<ApiEnvelope<T>> {
        let raw: Value = match serde_json::from_str(&self.body) {
            Ok(raw) => raw,
            Err(_) if !self.is_success() => return Err(self.http_error()),
            Err(e) => {
                return Err(Error::MalformedResponse(format!(
                    "body is not valid JSON: {e}"
                )))
            }
        };

        let Some(success) = raw.get("success").and_then(Value::as_bool) else {
            if !self.is_success() {
                return Err(self.http_error());
            }
            return Err(Error::MalformedResponse(
                "missing `success` flag".to_string(),
            ));
        };

        let error = match raw.get("error") {
            Some(value) if !value.is_null() => serde_json::from_value(value.clone()).ok(),
            _ => None,
        };

        let data = match raw.get("data") {
            Some(value) if success && !value.is_null() => Some(
                serde_json::from_value(value.clone())
                    .map_err(|e| Error::MalformedResponse(format!("unexpected `data`: {e}")))?,
            ),
            _ => None,
        };

        Ok(ApiEnvelope {
            success,
            data,
            error,
            raw,
        })
    }

    fn http_error(&self) -> Error {
        Error::Http {
            status: self.status,
            body: self.body.clone(),
        }
    }
}

/// Error object attached to a failed envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    /// Remote error code.
    pub code: i64,
    /// Per-item errors some methods report alongside the code.
    #[serde(default)]
    pub errors: Option<Value>,
}

/// Decoded `{success, data, error}` answer.
#[derive(Debug, Clone)]
pub struct ApiEnvelope<T> {
    /// `success` flag reported by the station.
    pub success: bool,
    /// Decoded `data`, present only on success.
    pub data: Option<T>,
    /// Error object, usually present only on failure.
    pub error: Option<ApiErrorBody>,
    raw: Value,
}

impl<T> ApiEnvelope<T> {
    /// The whole JSON body as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Remote error code, if the station sent one.
    pub fn error_code(&self) -> Option<i64> {
        self.error.as_ref().map(|e| e.code)
    }

    /// Returns `data`, failing when the station did not send any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming `what` when `data` is absent.
    pub fn into_data(self, what: &str) -> Result<T> {
        self.data
            .ok_or_else(|| Error::MalformedResponse(format!("{what}: missing `data`")))
    }

    /// Logs a soft failure with the diagnostic payload.
    pub(crate) fn log_failure(&self, message: &str) {
        error!(code = ?self.error_code(), payload = %self.raw, "{message}");
    }
}
