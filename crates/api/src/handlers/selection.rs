//! Handlers for the project/profile step (PRD-33).

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use copyforge_core::error::CoreError;
use copyforge_wizard::ProjectSelection;

use crate::error::{AppError, AppResult};
use crate::handlers::sessions::{fetch_session, SessionView};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// PUT /sessions/{id}/project
// ---------------------------------------------------------------------------

/// Record the project selection for a session.
///
/// A `New` selection is not created here; creation happens lazily at final
/// generation so abandoning the wizard leaves no empty project behind.
pub async fn set_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(selection): Json<ProjectSelection>,
) -> AppResult<impl IntoResponse> {
    if let ProjectSelection::New { name } = &selection {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Project name must not be empty".to_string(),
            )));
        }
    }

    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.project = Some(selection);

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// PUT /sessions/{id}/profile
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SetProfileRequest {
    pub profile_id: String,
}

/// Record the writing-profile selection for a session.
pub async fn set_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetProfileRequest>,
) -> AppResult<impl IntoResponse> {
    if body.profile_id.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "profile_id must not be empty".to_string(),
        )));
    }

    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.profile_id = Some(body.profile_id);

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// GET /projects, GET /profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub user_id: String,
}

/// List the user's projects from the project service.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> AppResult<impl IntoResponse> {
    let projects = state.services.projects.list_projects(&params.user_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// List the user's writing profiles from the profile service.
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> AppResult<impl IntoResponse> {
    let profiles = state.services.profiles.list_profiles(&params.user_id).await?;
    Ok(Json(DataResponse { data: profiles }))
}
