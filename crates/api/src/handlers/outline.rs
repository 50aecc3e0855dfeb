//! Handlers for the outline-review step (PRD-32).
//!
//! Every edit is a named action applied through the pure reducer; the API
//! never patches a draft piece field-by-field.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use copyforge_core::headings;
use copyforge_core::outline::{Field, OutlineAction};

use crate::error::AppResult;
use crate::handlers::sessions::{fetch_session, SessionView};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /sessions/{id}/pieces/{index}/outline
// ---------------------------------------------------------------------------

/// Apply one outline action to the draft at `index`.
///
/// The action's effect is visible on the owning record immediately; open
/// edit flags are adjusted for structural actions (a new entry opens in
/// edit mode, a removed entry's flag is dropped and later ones reindex).
pub async fn apply_action(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(action): Json<OutlineAction>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    session.apply_outline(index, &action)?;

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// PUT /sessions/{id}/pieces/{index}/edit-flags
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ToggleEditRequest {
    #[serde(flatten)]
    pub field: Field,
}

/// Toggle edit mode for one field of the draft at `index`.
pub async fn toggle_edit(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(body): Json<ToggleEditRequest>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    session.toggle_edit(index, body.field)?;

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// GET / PUT /sessions/{id}/pieces/{index}/outline-text
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, serde::Serialize)]
pub struct OutlineText {
    pub text: String,
}

/// Render the draft's outline tree as marker-prefixed plain text for the
/// free-form editor.
pub async fn get_outline_text(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let session = handle.lock().await;

    let editor = session.pieces().get(index).ok_or_else(|| {
        copyforge_core::CoreError::Validation(format!("No content piece at index {index}"))
    })?;
    let tree = editor.piece.outline_tree()?;

    Ok(Json(DataResponse {
        data: OutlineText {
            text: headings::render_outline_text(tree),
        },
    }))
}

/// Replace the draft's outline tree from marker-prefixed plain text.
///
/// Lines starting with `# `, `## ` and `### ` map to H1, section heading
/// and subsection; unmarked lines fall through to subsections. Open edit
/// flags on the piece are cleared since indices may have shifted.
pub async fn set_outline_text(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(body): Json<OutlineText>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    let tree = headings::parse_outline_text(&body.text)?;
    session.replace_outline(index, tree)?;

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}
