//! Client for the writing-profile service (PRD-33).

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::http;
use crate::traits::ProfileService;

/// A saved writing-style/brand-voice profile applied during generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// HTTP client for the profiles service.
pub struct ProfilesApi {
    client: reqwest::Client,
    url: String,
}

impl ProfilesApi {
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
impl ProfileService for ProfilesApi {
    async fn list_profiles(&self, user_id: &str) -> Result<Vec<Profile>, ServiceError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        http::parse_response(response).await
    }
}
