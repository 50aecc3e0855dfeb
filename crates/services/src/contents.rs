//! Client for the final content generation service (PRD-34).
//!
//! `POST {create_contents_url}` takes every draft piece plus the resolved
//! project and profile and returns one rendered result per input piece.

use serde::{Deserialize, Serialize};

use copyforge_core::content::BlogPostContent;

use crate::error::ServiceError;
use crate::http;
use crate::traits::ContentService;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One generation-request item: the draft piece flattened together with
/// the routing fields the generator needs.
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    #[serde(flatten)]
    pub piece: BlogPostContent,
    pub medium: String,
    pub topic: String,
    pub content_type_id: i64,
    pub model: String,
}

/// Request body for the create-contents endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateContentsRequest {
    pub user_id: String,
    pub project_id: String,
    pub profile_id: String,
    pub content_items: Vec<ContentItem>,
}

/// One generated result, echoing the input's topic and medium.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedResult {
    /// Backend-assigned content id.
    pub content_id: i64,
    /// Rendered HTML/markdown content.
    pub content: String,
    pub topic: String,
    pub medium: String,
}

#[derive(Debug, Deserialize)]
struct CreateContentsResponse {
    results: Vec<GeneratedResult>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the create-contents endpoint.
pub struct ContentsApi {
    client: reqwest::Client,
    url: String,
}

impl ContentsApi {
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
impl ContentService for ContentsApi {
    async fn create_contents(
        &self,
        request: &CreateContentsRequest,
    ) -> Result<Vec<GeneratedResult>, ServiceError> {
        let response = self.client.post(&self.url).json(request).send().await?;
        let parsed: CreateContentsResponse = http::parse_response(response).await?;
        if parsed.results.len() != request.content_items.len() {
            return Err(ServiceError::Decode(format!(
                "Expected {} results, got {}",
                request.content_items.len(),
                parsed.results.len()
            )));
        }
        Ok(parsed.results)
    }
}
