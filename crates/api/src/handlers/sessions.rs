//! Handlers for wizard session lifecycle (PRD-36).
//!
//! Sessions live in process memory for the duration of a wizard run;
//! deleting one drops all unsaved content.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use copyforge_core::batch::BatchPhase;
use copyforge_core::content::BlogPostContent;
use copyforge_core::editor::EditorState;
use copyforge_core::error::CoreError;
use copyforge_core::idea::{ContentIdeaConfig, DateRange};
use copyforge_core::outline::EditFlags;
use copyforge_wizard::{ProjectSelection, WizardSession};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View DTOs
// ---------------------------------------------------------------------------

/// One draft piece with its edit-mode flags, as seen by the client.
#[derive(Debug, Serialize)]
pub struct PieceView {
    #[serde(flatten)]
    pub piece: BlogPostContent,
    pub flags: EditFlags,
}

/// Full client-facing view of a session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub user_id: String,
    pub step: u8,
    pub step_label: &'static str,
    pub config: ContentIdeaConfig,
    pub date_range: DateRange,
    pub pieces: Vec<PieceView>,
    pub project: Option<ProjectSelection>,
    pub profile_id: Option<String>,
    pub items: Vec<EditorState>,
    pub phase: BatchPhase,
}

impl SessionView {
    pub fn from_session(session: &WizardSession) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id.clone(),
            step: session.step().to_number(),
            step_label: session.step().label(),
            config: session.config.clone(),
            date_range: session.date_range,
            pieces: session
                .pieces()
                .iter()
                .map(|editor| PieceView {
                    piece: editor.piece.clone(),
                    flags: editor.flags.clone(),
                })
                .collect(),
            project: session.project.clone(),
            profile_id: session.profile_id.clone(),
            items: session.items().to_vec(),
            phase: session.phase(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up a session handle, returning 404 for unknown ids.
pub async fn fetch_session(
    state: &AppState,
    id: Uuid,
) -> AppResult<Arc<Mutex<WizardSession>>> {
    state.session(id).await.map_err(AppError::Core)
}

// ---------------------------------------------------------------------------
// POST /sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
}

/// Create a new wizard session for a user.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionRequest>,
) -> AppResult<impl IntoResponse> {
    if body.user_id.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "user_id must not be empty".to_string(),
        )));
    }

    let session = WizardSession::new(body.user_id.clone());
    let id = session.id;
    let view = SessionView::from_session(&session);

    state
        .sessions
        .write()
        .await
        .insert(id, Arc::new(Mutex::new(session)));

    tracing::info!(session_id = %id, user_id = %body.user_id, "Wizard session created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

// ---------------------------------------------------------------------------
// GET /sessions/{id}
// ---------------------------------------------------------------------------

/// Get the full view of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /sessions/{id}
// ---------------------------------------------------------------------------

/// Discard a session and everything it holds.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let removed = state.sessions.write().await.remove(&id);
    if removed.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "session",
            id: id.to_string(),
        }));
    }

    tracing::info!(session_id = %id, "Wizard session discarded");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /sessions/{id}/advance
// ---------------------------------------------------------------------------

/// Advance the wizard one step (clamped at the last step).
pub async fn advance_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.advance_step();

    tracing::info!(session_id = %id, step = session.step().to_number(), "Session advanced");
    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// PUT /sessions/{id}/step
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct JumpStepRequest {
    pub step: u8,
}

/// Jump directly to a step by its 1-based number.
pub async fn jump_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<JumpStepRequest>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.jump_step(body.step)?;

    tracing::info!(session_id = %id, step = body.step, "Session jumped");
    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// POST /sessions/{id}/back
// ---------------------------------------------------------------------------

/// Go back one step (floored at the first). Later-step state is preserved.
pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.back_step();

    tracing::info!(session_id = %id, step = session.step().to_number(), "Session went back");
    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}
