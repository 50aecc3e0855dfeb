//! Error type shared by every service client.

/// Errors from the external-service client layer.
///
/// Callers treat [`ServiceError::Request`] and [`ServiceError::Api`]
/// identically (a failed call); the split exists for logging and for the
/// upstream status echoed in API error responses.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The response was 2xx but its body did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Decode(String),
}
