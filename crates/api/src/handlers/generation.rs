//! Handlers for final content generation (PRD-34).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use copyforge_wizard::generate;
use copyforge_wizard::progress;

use crate::error::AppResult;
use crate::handlers::sessions::{fetch_session, SessionView};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /sessions/{id}/generate-contents
// ---------------------------------------------------------------------------

/// Generate final content for every draft piece in the session.
///
/// Resolves the project selection first (creating a new project on demand),
/// then issues one generation request covering all pieces. On success the
/// results become the finalized-item list and the wizard advances.
pub async fn generate_contents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    generate::generate_contents(
        &mut session,
        state.services.projects.as_ref(),
        state.services.contents.as_ref(),
    )
    .await?;

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// GET /generation-messages
// ---------------------------------------------------------------------------

/// Return the rotating status messages shown while generation runs.
///
/// The client drives its own rotation timer; this endpoint just hands it
/// the message list and rotation period.
pub async fn generation_messages() -> impl IntoResponse {
    Json(DataResponse {
        data: serde_json::json!({
            "messages": progress::GENERATION_MESSAGES,
            "period_secs": progress::DEFAULT_PERIOD.as_secs(),
        }),
    })
}
