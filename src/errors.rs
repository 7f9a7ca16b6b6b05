//! Error types for Clockk API operations.
//!
//! Every failure surfaces to the immediate caller as one of these variants;
//! nothing is retried or swallowed inside the client.

use thiserror::Error;

/// Errors produced by the Clockk client.
#[derive(Debug, Error)]
pub enum ClockkError {
    /// The client cannot proceed with the supplied configuration: required
    /// session state is missing (token or customer id), or the HTTP client
    /// could not be built from it. Detected before dispatch; no network
    /// call is made.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP transport failed (connection error, timeout). The underlying
    /// cause is preserved as the error source.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status. `body` is the service's
    /// own error document, parsed but otherwise untouched, so callers can
    /// branch on its shape (e.g. `body["errors"]`).
    #[error("Clockk API returned status {status}")]
    RemoteApi {
        /// HTTP status code of the response.
        status: u16,
        /// The parsed response body, verbatim.
        body: serde_json::Value,
    },

    /// A response body was present but could not be parsed as JSON, or the
    /// parsed document did not match the expected JSON:API shape.
    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    /// A resource object matched none of the known Clockk resource shapes.
    #[error("Unrecognized resource: {0}")]
    Classification(String),
}

/// Result type alias for Clockk client operations.
pub type Result<T> = std::result::Result<T, ClockkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_api_error_keeps_body_verbatim() {
        let body = serde_json::json!({"errors": [{"detail": "Name can't be blank"}]});
        let err = ClockkError::RemoteApi { status: 422, body: body.clone() };

        assert_eq!(err.to_string(), "Clockk API returned status 422");
        match err {
            ClockkError::RemoteApi { status, body: got } => {
                assert_eq!(status, 422);
                assert_eq!(got, body);
            }
            other => panic!("expected RemoteApi, got {other:?}"),
        }
    }

    #[test]
    fn config_error_display() {
        let err = ClockkError::Config("token must be set".into());
        assert_eq!(err.to_string(), "Configuration error: token must be set");
    }
}
