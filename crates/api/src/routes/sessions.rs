//! Route definitions for the content-idea wizard (PRD-31..35).
//!
//! Mounted at `/sessions` by `api_routes()`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{generation, idea, outline, schedule, selection, sessions};
use crate::state::AppState;

/// Wizard session routes — mounted at `/sessions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::create_session))
        .route(
            "/{id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/{id}/advance", post(sessions::advance_step))
        .route("/{id}/back", post(sessions::go_back))
        .route("/{id}/step", put(sessions::jump_step))
        .route("/{id}/idea", put(idea::update_idea))
        .route("/{id}/generate-ideas", post(idea::generate_ideas))
        .route("/{id}/pieces/{index}/outline", post(outline::apply_action))
        .route(
            "/{id}/pieces/{index}/outline-text",
            get(outline::get_outline_text).put(outline::set_outline_text),
        )
        .route("/{id}/pieces/{index}/edit-flags", put(outline::toggle_edit))
        .route("/{id}/project", put(selection::set_project))
        .route("/{id}/profile", put(selection::set_profile))
        .route(
            "/{id}/generate-contents",
            post(generation::generate_contents),
        )
        .route(
            "/{id}/items/{item_id}/schedule",
            put(schedule::set_item_schedule).delete(schedule::clear_item_schedule),
        )
        .route("/{id}/save-and-schedule", post(schedule::save_and_schedule))
}
