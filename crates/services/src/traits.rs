//! Service seams consumed by the wizard engine.
//!
//! Each external collaborator is fronted by a trait so orchestration code
//! can run against in-memory fakes in tests. The reqwest clients in the
//! sibling modules are the production implementations.

use chrono::{DateTime, Utc};

use copyforge_core::content::BlogPostContent;

use crate::content_store::SaveContentRequest;
use crate::contents::{CreateContentsRequest, GeneratedResult};
use crate::error::ServiceError;
use crate::profiles::Profile;
use crate::projects::{CreateProjectRequest, Project};
use crate::schedule::{ScheduleRequest, ScheduledEvent};
use crate::strategy::StrategyRequest;

/// Idea generation: config in, draft content pieces out.
#[async_trait::async_trait]
pub trait StrategyService: Send + Sync {
    async fn generate_ideas(
        &self,
        request: &StrategyRequest,
    ) -> Result<Vec<BlogPostContent>, ServiceError>;
}

/// Final content generation: drafts plus project/profile in, rendered
/// results out (one per input item).
#[async_trait::async_trait]
pub trait ContentService: Send + Sync {
    async fn create_contents(
        &self,
        request: &CreateContentsRequest,
    ) -> Result<Vec<GeneratedResult>, ServiceError>;
}

/// Project storage.
#[async_trait::async_trait]
pub trait ProjectService: Send + Sync {
    /// Create a project, returning the backend-assigned id.
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<String, ServiceError>;

    async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, ServiceError>;
}

/// Writing-profile storage.
#[async_trait::async_trait]
pub trait ProfileService: Send + Sync {
    async fn list_profiles(&self, user_id: &str) -> Result<Vec<Profile>, ServiceError>;
}

/// Content persistence, one call per item.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    async fn save_content(
        &self,
        content_id: i64,
        user_id: &str,
        request: &SaveContentRequest,
    ) -> Result<(), ServiceError>;
}

/// Publish-date scheduling and the calendar view's CRUD.
#[async_trait::async_trait]
pub trait ScheduleService: Send + Sync {
    async fn create_schedule(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduledEvent, ServiceError>;

    async fn list_schedules(&self, user_id: &str) -> Result<Vec<ScheduledEvent>, ServiceError>;

    async fn update_schedule(
        &self,
        id: i64,
        publish_at: DateTime<Utc>,
    ) -> Result<ScheduledEvent, ServiceError>;

    async fn delete_schedule(&self, id: i64) -> Result<(), ServiceError>;
}
