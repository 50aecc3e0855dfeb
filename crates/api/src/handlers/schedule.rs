//! Handlers for the save-and-schedule step and the calendar view (PRD-35).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use copyforge_core::editor::compose_publish_at;
use copyforge_wizard::coordinator;

use crate::error::AppResult;
use crate::handlers::selection::UserParams;
use crate::handlers::sessions::{fetch_session, SessionView};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// PUT /sessions/{id}/items/{item_id}/schedule
// ---------------------------------------------------------------------------

/// Date and wall-clock time the user picked for one item. Composed into a
/// single UTC instant server-side.
#[derive(Debug, Deserialize)]
pub struct SetScheduleRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Flag an item for scheduling at the composed publish instant.
pub async fn set_item_schedule(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<SetScheduleRequest>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    let publish_at = compose_publish_at(body.date, body.time);
    session.item_mut(item_id)?.set_schedule(publish_at);

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

/// Clear an item's schedule flag and publish date.
pub async fn clear_item_schedule(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    session.item_mut(item_id)?.clear_schedule();

    Ok(Json(DataResponse {
        data: SessionView::from_session(&session),
    }))
}

// ---------------------------------------------------------------------------
// POST /sessions/{id}/save-and-schedule
// ---------------------------------------------------------------------------

/// Run the save-and-schedule batch over the session's items.
///
/// Saves fan out concurrently; any save failure gates scheduling entirely
/// and leaves the session in a retryable partial-failure phase. Schedule
/// failures are reported but never fail the batch.
pub async fn save_and_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let handle = fetch_session(&state, id).await?;
    let mut session = handle.lock().await;

    let report = coordinator::run_batch(
        &mut session,
        state.services.content_store.as_ref(),
        state.services.schedule.as_ref(),
    )
    .await?;

    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// Calendar pass-throughs: /schedule
// ---------------------------------------------------------------------------

/// List all scheduled events for a user.
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> AppResult<impl IntoResponse> {
    let events = state.services.schedule.list_schedules(&params.user_id).await?;
    Ok(Json(DataResponse { data: events }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateScheduleRequest {
    pub publish_at: DateTime<Utc>,
}

/// Move a scheduled event to a new publish instant.
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateScheduleRequest>,
) -> AppResult<impl IntoResponse> {
    let event = state
        .services
        .schedule
        .update_schedule(id, body.publish_at)
        .await?;
    Ok(Json(DataResponse { data: event }))
}

/// Remove a scheduled event.
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    state.services.schedule.delete_schedule(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
