use copyforge_core::CoreError;
use copyforge_services::ServiceError;

/// Error type for wizard operations.
///
/// Validation failures surface before any network call; service failures
/// leave the session untouched (the caller's step and working set are
/// preserved for a manual retry).
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// A domain-level error (validation, missing selection, bad index).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An external service call failed (network error or non-2xx).
    #[error(transparent)]
    Service(#[from] ServiceError),
}
