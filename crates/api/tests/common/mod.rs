//! Shared test harness: in-memory service fakes plus the full app router.
//!
//! The fakes record every request they receive and can be told to fail, so
//! integration tests can drive the whole wizard over HTTP without any
//! upstream service running.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use copyforge_core::content::{BlogPostContent, OutlineTree, Section};
use copyforge_services::content_store::SaveContentRequest;
use copyforge_services::contents::{CreateContentsRequest, GeneratedResult};
use copyforge_services::profiles::Profile;
use copyforge_services::projects::{CreateProjectRequest, Project};
use copyforge_services::schedule::{ScheduleRequest, ScheduledEvent};
use copyforge_services::strategy::StrategyRequest;
use copyforge_services::{
    ContentService, ContentStore, ProfileService, ProjectService, ScheduleService, ServiceError,
    StrategyService,
};

use copyforge_api::config::ServerConfig;
use copyforge_api::router::build_app_router;
use copyforge_api::state::{AppState, ServiceHandles, SessionMap};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

fn upstream_failure() -> ServiceError {
    ServiceError::Api {
        status: 500,
        body: "upstream failure".to_string(),
    }
}

/// One draft piece with a minimal valid outline.
pub fn draft_piece(id: &str, content_type: &str) -> BlogPostContent {
    BlogPostContent {
        content_id: id.to_string(),
        content_type: content_type.to_string(),
        title: format!("Title {id}"),
        outline: vec![OutlineTree {
            h1: format!("H1 {id}"),
            sections: vec![Section {
                h2: "Background".to_string(),
                h3: vec!["Detail".to_string()],
            }],
        }],
        ..Default::default()
    }
}

/// Strategy fake: returns `num_content_types` drafts per call.
#[derive(Default)]
pub struct FakeStrategy {
    pub requests: Mutex<Vec<StrategyRequest>>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl StrategyService for FakeStrategy {
    async fn generate_ideas(
        &self,
        request: &StrategyRequest,
    ) -> Result<Vec<BlogPostContent>, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(upstream_failure());
        }
        let medium = request
            .content_types
            .split(',')
            .next()
            .unwrap_or("blog post")
            .to_string();
        Ok((0..request.num_content_types)
            .map(|i| draft_piece(&format!("draft-{i}"), &medium))
            .collect())
    }
}

/// Contents fake: assigns sequential backend ids starting at 100.
#[derive(Default)]
pub struct FakeContents {
    pub requests: Mutex<Vec<CreateContentsRequest>>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl ContentService for FakeContents {
    async fn create_contents(
        &self,
        request: &CreateContentsRequest,
    ) -> Result<Vec<GeneratedResult>, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(upstream_failure());
        }
        Ok(request
            .content_items
            .iter()
            .enumerate()
            .map(|(i, item)| GeneratedResult {
                content_id: 100 + i as i64,
                content: format!("<h1>{}</h1>", item.piece.title),
                topic: item.topic.clone(),
                medium: item.medium.clone(),
            })
            .collect())
    }
}

/// Projects fake: lists one canned project, creates with fresh ids.
#[derive(Default)]
pub struct FakeProjects {
    pub created: Mutex<Vec<CreateProjectRequest>>,
}

#[async_trait::async_trait]
impl ProjectService for FakeProjects {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<String, ServiceError> {
        let mut created = self.created.lock().unwrap();
        created.push(request.clone());
        Ok(format!("proj-{}", created.len()))
    }

    async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, ServiceError> {
        Ok(vec![Project {
            id: "proj-existing".to_string(),
            name: format!("{user_id}'s project"),
            description: String::new(),
        }])
    }
}

#[derive(Default)]
pub struct FakeProfiles;

#[async_trait::async_trait]
impl ProfileService for FakeProfiles {
    async fn list_profiles(&self, _user_id: &str) -> Result<Vec<Profile>, ServiceError> {
        Ok(vec![Profile {
            id: "profile-1".to_string(),
            name: "House style".to_string(),
            description: String::new(),
        }])
    }
}

/// Content-store fake: records saves, fails for listed content ids.
#[derive(Default)]
pub struct FakeStore {
    pub saved: Mutex<Vec<(i64, String, SaveContentRequest)>>,
    pub fail_ids: HashSet<i64>,
}

#[async_trait::async_trait]
impl ContentStore for FakeStore {
    async fn save_content(
        &self,
        content_id: i64,
        user_id: &str,
        request: &SaveContentRequest,
    ) -> Result<(), ServiceError> {
        if self.fail_ids.contains(&content_id) {
            return Err(upstream_failure());
        }
        self.saved
            .lock()
            .unwrap()
            .push((content_id, user_id.to_string(), request.clone()));
        Ok(())
    }
}

/// Schedule fake: records created entries with sequential ids.
#[derive(Default)]
pub struct FakeScheduler {
    pub created: Mutex<Vec<ScheduleRequest>>,
    pub next_id: AtomicI64,
}

#[async_trait::async_trait]
impl ScheduleService for FakeScheduler {
    async fn create_schedule(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduledEvent, ServiceError> {
        self.created.lock().unwrap().push(request.clone());
        Ok(ScheduledEvent {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            content_id: request.content_id,
            publish_at: request.publish_at,
            status: request.status.clone(),
        })
    }

    async fn list_schedules(&self, _user_id: &str) -> Result<Vec<ScheduledEvent>, ServiceError> {
        Ok(self
            .created
            .lock()
            .unwrap()
            .iter()
            .enumerate()
            .map(|(i, request)| ScheduledEvent {
                id: i as i64 + 1,
                content_id: request.content_id,
                publish_at: request.publish_at,
                status: request.status.clone(),
            })
            .collect())
    }

    async fn update_schedule(
        &self,
        id: i64,
        publish_at: DateTime<Utc>,
    ) -> Result<ScheduledEvent, ServiceError> {
        Ok(ScheduledEvent {
            id,
            content_id: 0,
            publish_at,
            status: "pending".to_string(),
        })
    }

    async fn delete_schedule(&self, _id: i64) -> Result<(), ServiceError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Handles to the fakes so tests can assert on recorded requests after
/// driving the app over HTTP.
///
/// The session registry lives here, not in the router, so a test can
/// build as many routers as it needs and they all see the same sessions.
pub struct TestServices {
    pub strategy: Arc<FakeStrategy>,
    pub contents: Arc<FakeContents>,
    pub projects: Arc<FakeProjects>,
    pub profiles: Arc<FakeProfiles>,
    pub store: Arc<FakeStore>,
    pub scheduler: Arc<FakeScheduler>,
    sessions: SessionMap,
}

impl Default for TestServices {
    fn default() -> Self {
        Self {
            strategy: Arc::new(FakeStrategy::default()),
            contents: Arc::new(FakeContents::default()),
            projects: Arc::new(FakeProjects::default()),
            profiles: Arc::new(FakeProfiles),
            store: Arc::new(FakeStore::default()),
            scheduler: Arc::new(FakeScheduler::default()),
            sessions: SessionMap::default(),
        }
    }
}

impl TestServices {
    fn handles(&self) -> ServiceHandles {
        ServiceHandles {
            strategy: self.strategy.clone(),
            contents: self.contents.clone(),
            projects: self.projects.clone(),
            profiles: self.profiles.clone(),
            content_store: self.store.clone(),
            schedule: self.scheduler.clone(),
        }
    }
}

/// Build the full application router with all middleware layers, backed by
/// the given fakes.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(services: &TestServices) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        sessions: services.sessions.clone(),
        services: Arc::new(services.handles()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the parsed body.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
