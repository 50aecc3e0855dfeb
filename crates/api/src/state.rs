use std::collections::HashMap;
use std::sync::Arc;

use copyforge_services::content_store::ContentStoreApi;
use copyforge_services::contents::ContentsApi;
use copyforge_services::profiles::ProfilesApi;
use copyforge_services::projects::ProjectsApi;
use copyforge_services::schedule::ScheduleApi;
use copyforge_services::strategy::StrategyApi;
use copyforge_services::{
    ContentService, ContentStore, ProfileService, ProjectService, ScheduleService,
    ServiceEndpoints, StrategyService,
};
use copyforge_wizard::WizardSession;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::config::ServerConfig;

/// In-memory session registry.
///
/// Each session sits behind its own `Mutex` so the registry lock is held
/// only long enough to look up the entry, never across an upstream call.
pub type SessionMap = Arc<RwLock<HashMap<Uuid, Arc<Mutex<WizardSession>>>>>;

/// Handles to the upstream content services, as trait objects so tests can
/// substitute fakes.
pub struct ServiceHandles {
    pub strategy: Arc<dyn StrategyService>,
    pub contents: Arc<dyn ContentService>,
    pub projects: Arc<dyn ProjectService>,
    pub profiles: Arc<dyn ProfileService>,
    pub content_store: Arc<dyn ContentStore>,
    pub schedule: Arc<dyn ScheduleService>,
}

impl ServiceHandles {
    /// Build production handles from configured endpoints, sharing a single
    /// HTTP client across all of them.
    pub fn from_endpoints(endpoints: &ServiceEndpoints) -> Self {
        let client = reqwest::Client::new();
        Self {
            strategy: Arc::new(StrategyApi::with_client(
                client.clone(),
                endpoints.content_strategy_url.clone(),
            )),
            contents: Arc::new(ContentsApi::with_client(
                client.clone(),
                endpoints.create_contents_url.clone(),
            )),
            projects: Arc::new(ProjectsApi::with_client(
                client.clone(),
                endpoints.projects_url.clone(),
            )),
            profiles: Arc::new(ProfilesApi::with_client(
                client.clone(),
                endpoints.profiles_url.clone(),
            )),
            content_store: Arc::new(ContentStoreApi::with_client(
                client.clone(),
                endpoints.content_service_url.clone(),
            )),
            schedule: Arc::new(ScheduleApi::with_client(
                client,
                endpoints.schedule_service_url.clone(),
            )),
        }
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Active wizard sessions, keyed by session id.
    pub sessions: SessionMap,
    /// Upstream service clients.
    pub services: Arc<ServiceHandles>,
}

impl AppState {
    pub fn new(config: ServerConfig, services: ServiceHandles) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            services: Arc::new(services),
        }
    }

    /// Look up a session by id, returning a clone of its handle.
    ///
    /// The registry lock is released before the caller awaits anything on
    /// the session itself.
    pub async fn session(
        &self,
        id: Uuid,
    ) -> Result<Arc<Mutex<WizardSession>>, copyforge_core::CoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(copyforge_core::CoreError::NotFound {
                entity: "session",
                id: id.to_string(),
            })
    }
}
