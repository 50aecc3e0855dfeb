//! Client for the project storage service (PRD-33).

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::http;
use crate::traits::ProjectService;

/// Request body for project creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub user_id: String,
}

/// One project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Response of `POST {projects_url}`.
#[derive(Debug, Deserialize)]
struct CreateProjectResponse {
    id: String,
}

/// HTTP client for the projects service.
pub struct ProjectsApi {
    client: reqwest::Client,
    url: String,
}

impl ProjectsApi {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait::async_trait]
impl ProjectService for ProjectsApi {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<String, ServiceError> {
        let response = self.client.post(&self.url).json(request).send().await?;
        let parsed: CreateProjectResponse = http::parse_response(response).await?;
        tracing::info!(project_id = %parsed.id, name = %request.name, "Project created");
        Ok(parsed.id)
    }

    async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, ServiceError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        http::parse_response(response).await
    }
}
