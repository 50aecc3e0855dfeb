//! Client for the content persistence service (PRD-35).
//!
//! `PUT {content_service_url}/content/{content_id}/user/{user_id}` stores
//! one rendered content piece under a project. The batch coordinator fans
//! these calls out concurrently, one per item.

use serde::Serialize;

use crate::error::ServiceError;
use crate::http;
use crate::traits::ContentStore;

/// Request body for persisting one content piece.
#[derive(Debug, Clone, Serialize)]
pub struct SaveContentRequest {
    /// Display name in the content library (the piece's topic).
    pub name: String,
    /// Rendered HTML content.
    pub content: String,
    pub project_id: String,
}

/// HTTP client for the content persistence service.
pub struct ContentStoreApi {
    client: reqwest::Client,
    base_url: String,
}

impl ContentStoreApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait::async_trait]
impl ContentStore for ContentStoreApi {
    async fn save_content(
        &self,
        content_id: i64,
        user_id: &str,
        request: &SaveContentRequest,
    ) -> Result<(), ServiceError> {
        let url = format!(
            "{}/content/{}/user/{}",
            self.base_url, content_id, user_id
        );
        let response = self.client.put(url).json(request).send().await?;
        http::check_status(response).await
    }
}
