pub mod catalog;
pub mod health;
pub mod schedule;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                                        create
/// /sessions/{id}                                   get, delete
/// /sessions/{id}/advance                           advance step (POST)
/// /sessions/{id}/back                              go back (POST)
/// /sessions/{id}/step                              jump to step (PUT)
/// /sessions/{id}/idea                              update idea config (PUT)
/// /sessions/{id}/generate-ideas                    idea generation (POST)
/// /sessions/{id}/pieces/{index}/outline            apply outline action (POST)
/// /sessions/{id}/pieces/{index}/outline-text       get, replace as plain text
/// /sessions/{id}/pieces/{index}/edit-flags         toggle edit mode (PUT)
/// /sessions/{id}/project                           set project selection (PUT)
/// /sessions/{id}/profile                           set writing profile (PUT)
/// /sessions/{id}/generate-contents                 final generation (POST)
/// /sessions/{id}/items/{item_id}/schedule          set (PUT), clear (DELETE)
/// /sessions/{id}/save-and-schedule                 run batch (POST)
///
/// /projects                                        list (?user_id)
/// /profiles                                        list (?user_id)
/// /generation-messages                             loading message list
///
/// /schedule                                        list (?user_id)
/// /schedule/{id}                                   update (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sessions", sessions::router())
        .merge(catalog::router())
        .nest("/schedule", schedule::router())
}
