//! Handlers for the idea-entry step (PRD-31).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use copyforge_core::idea::DateRange;
use copyforge_wizard::ideas;

use crate::error::AppResult;
use crate::handlers::sessions::{fetch_session, SessionView};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// PUT /sessions/{id}/idea
// ---------------------------------------------------------------------------

/// Body for updating the first-step configuration.
///
/// The requested piece count is clamped into range on write, so the stored
/// config never leaves `[1, 5]` no matter what the client sends.
#[derive(Debug, Deserialize)]
pub struct UpdateIdeaRequest {
    pub content_idea: String,
    pub content_types: Vec<String>,
    #[serde(default)]
    pub target_audience: String,
    pub num_content_pieces: u8,
    #[serde(default)]
    pub date_range: DateRange,
}

/// Update the idea configuration for a session.
///
/// Duplicate mediums in the submitted list are dropped, keeping first
/// occurrence order.
pub async fn update_idea(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    session.config.content_idea = body.content_idea;
    session.config.target_audience = body.target_audience;
    session.config.set_num_content_pieces(body.num_content_pieces);
    session.config.content_types.clear();
    for medium in &body.content_types {
        session.config.add_content_type(medium);
    }
    session.date_range = body.date_range;

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// POST /sessions/{id}/generate-ideas
// ---------------------------------------------------------------------------

/// Submit the idea config to the strategy service.
///
/// Validation failures surface as 400 before any upstream call; on success
/// the drafts replace the working set and the wizard advances.
pub async fn generate_ideas(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    ideas::generate_ideas(&mut session, state.services.strategy.as_ref()).await?;

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}
