//! Routes for the scheduling calendar (PRD-35).
//!
//! Mounted at `/schedule` by `api_routes()`. These are pass-throughs to
//! the schedule service; the wizard's own scheduling lives under
//! `/sessions/{id}`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Calendar routes — mounted at `/schedule`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(schedule::list_schedules))
        .route(
            "/{id}",
            put(schedule::update_schedule).delete(schedule::delete_schedule),
        )
}
