use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use copyforge_core::CoreError;
use copyforge_services::ServiceError;
use copyforge_wizard::WizardError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ServiceError`] for upstream
/// service failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `copyforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from an upstream content service.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::Core(core) => AppError::Core(core),
            WizardError::Service(svc) => AppError::Service(svc),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Upstream service errors ---
            AppError::Service(svc) => classify_service_error(svc),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an upstream service error into an HTTP status, error code, and
/// message.
///
/// - Upstream 4xx responses surface as 502 with the upstream status in the
///   message; they indicate a contract mismatch between this gateway and the
///   content service, not caller error.
/// - Transport and decode failures map to 502 with a sanitized message.
fn classify_service_error(err: &ServiceError) -> (StatusCode, &'static str, String) {
    match err {
        ServiceError::Api { status, body } => {
            tracing::error!(upstream_status = status, body = %body, "Upstream service error");
            (
                StatusCode::BAD_GATEWAY,
                "BAD_GATEWAY",
                format!("Upstream service returned status {status}"),
            )
        }
        ServiceError::Request(req_err) => {
            tracing::error!(error = %req_err, "Upstream request failed");
            (
                StatusCode::BAD_GATEWAY,
                "BAD_GATEWAY",
                "Failed to reach upstream service".to_string(),
            )
        }
        ServiceError::Decode(msg) => {
            tracing::error!(error = %msg, "Failed to decode upstream response");
            (
                StatusCode::BAD_GATEWAY,
                "BAD_GATEWAY",
                "Invalid response from upstream service".to_string(),
            )
        }
    }
}
