//! Client for the scheduling service (PRD-35).
//!
//! Creates pending publish-date entries for saved content and backs the
//! calendar view's list/reschedule/cancel operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::http;
use crate::traits::ScheduleService;

/// Status a newly created schedule entry starts in.
pub const STATUS_PENDING: &str = "pending";

/// Request body of `POST {schedule_service_url}/schedule`.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRequest {
    pub content_id: i64,
    /// ISO-8601 publication timestamp.
    pub publish_at: DateTime<Utc>,
    pub user_id: String,
    pub status: String,
}

impl ScheduleRequest {
    /// Build a pending schedule request for a saved content piece.
    pub fn pending(content_id: i64, publish_at: DateTime<Utc>, user_id: &str) -> Self {
        Self {
            content_id,
            publish_at,
            user_id: user_id.to_string(),
            status: STATUS_PENDING.to_string(),
        }
    }
}

/// One persisted scheduled event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: i64,
    pub content_id: i64,
    pub publish_at: DateTime<Utc>,
    pub status: String,
}

/// HTTP client for the scheduling service.
pub struct ScheduleApi {
    client: reqwest::Client,
    base_url: String,
}

impl ScheduleApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn schedule_url(&self) -> String {
        format!("{}/schedule", self.base_url)
    }
}

#[async_trait::async_trait]
impl ScheduleService for ScheduleApi {
    async fn create_schedule(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduledEvent, ServiceError> {
        let response = self
            .client
            .post(self.schedule_url())
            .json(request)
            .send()
            .await?;
        http::parse_response(response).await
    }

    async fn list_schedules(&self, user_id: &str) -> Result<Vec<ScheduledEvent>, ServiceError> {
        let response = self
            .client
            .get(self.schedule_url())
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        http::parse_response(response).await
    }

    async fn update_schedule(
        &self,
        id: i64,
        publish_at: DateTime<Utc>,
    ) -> Result<ScheduledEvent, ServiceError> {
        let response = self
            .client
            .put(format!("{}/{}", self.schedule_url(), id))
            .json(&serde_json::json!({ "publish_at": publish_at }))
            .send()
            .await?;
        http::parse_response(response).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<(), ServiceError> {
        let response = self
            .client
            .delete(format!("{}/{}", self.schedule_url(), id))
            .send()
            .await?;
        http::check_status(response).await
    }
}
