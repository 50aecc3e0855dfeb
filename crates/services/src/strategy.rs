//! Client for the content-strategy (idea generation) service (PRD-31).
//!
//! `POST {content_strategy_url}` takes the idea configuration and returns
//! a batch of draft content pieces with structured outlines.

use serde::{Deserialize, Serialize};

use copyforge_core::content::BlogPostContent;
use copyforge_core::idea::{ContentIdeaConfig, DateRange};

use crate::error::ServiceError;
use crate::http;
use crate::traits::StrategyService;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body for the strategy endpoint.
///
/// `content_types` is comma-joined on the wire and `num_content_types`
/// carries the per-medium piece count -- both are quirks of the upstream
/// contract, preserved here.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyRequest {
    pub idea: String,
    pub content_types: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    pub num_content_types: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
}

impl StrategyRequest {
    /// Build the wire request from a validated idea config.
    pub fn from_config(config: &ContentIdeaConfig, range: &DateRange, user_id: &str) -> Self {
        Self {
            idea: config.content_idea.clone(),
            content_types: config.content_types.join(","),
            user_id: user_id.to_string(),
            target_audience: if config.target_audience.trim().is_empty() {
                None
            } else {
                Some(config.target_audience.clone())
            },
            num_content_types: config.num_content_pieces,
            from_date: range.from.map(|d| d.to_string()),
            to_date: range.to.map(|d| d.to_string()),
        }
    }
}

/// Response envelope: `{ content: { content_strategy: { content_pieces } } }`.
#[derive(Debug, Deserialize)]
struct StrategyResponse {
    content: StrategyContent,
}

#[derive(Debug, Deserialize)]
struct StrategyContent {
    content_strategy: ContentStrategy,
}

#[derive(Debug, Deserialize)]
struct ContentStrategy {
    content_pieces: Vec<BlogPostContent>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the content-strategy endpoint.
pub struct StrategyApi {
    client: reqwest::Client,
    url: String,
}

impl StrategyApi {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait::async_trait]
impl StrategyService for StrategyApi {
    async fn generate_ideas(
        &self,
        request: &StrategyRequest,
    ) -> Result<Vec<BlogPostContent>, ServiceError> {
        let response = self.client.post(&self.url).json(request).send().await?;
        let parsed: StrategyResponse = http::parse_response(response).await?;
        let pieces = parsed.content.content_strategy.content_pieces;
        tracing::debug!(count = pieces.len(), "Strategy service returned content pieces");
        Ok(pieces)
    }
}
