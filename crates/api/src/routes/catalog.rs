//! Routes for project/profile listings and generation UI metadata (PRD-33/34).

use axum::routing::get;
use axum::Router;

use crate::handlers::{generation, selection};
use crate::state::AppState;

/// Catalog routes — merged directly into `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(selection::list_projects))
        .route("/profiles", get(selection::list_profiles))
        .route("/generation-messages", get(generation::generation_messages))
}
