//! External service endpoint configuration.

/// Base URLs for the external collaborator services, loaded from
/// environment variables.
///
/// All fields have local-development defaults; production overrides via
/// environment variables.
#[derive(Debug, Clone)]
pub struct ServiceEndpoints {
    /// Content-strategy (idea generation) endpoint.
    pub content_strategy_url: String,
    /// Final content generation endpoint.
    pub create_contents_url: String,
    /// Project storage service.
    pub projects_url: String,
    /// Writing-profile service.
    pub profiles_url: String,
    /// Content persistence service base URL.
    pub content_service_url: String,
    /// Scheduling service base URL.
    pub schedule_service_url: String,
}

impl ServiceEndpoints {
    /// Load endpoints from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `CONTENT_STRATEGY_URL` | `http://localhost:9001/strategy` |
    /// | `CREATE_CONTENTS_URL`  | `http://localhost:9001/contents` |
    /// | `PROJECTS_URL`         | `http://localhost:9002/projects` |
    /// | `PROFILES_URL`         | `http://localhost:9002/profiles` |
    /// | `CONTENT_SERVICE_URL`  | `http://localhost:9003`          |
    /// | `SCHEDULE_SERVICE_URL` | `http://localhost:9004`          |
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };
        Self {
            content_strategy_url: var("CONTENT_STRATEGY_URL", "http://localhost:9001/strategy"),
            create_contents_url: var("CREATE_CONTENTS_URL", "http://localhost:9001/contents"),
            projects_url: var("PROJECTS_URL", "http://localhost:9002/projects"),
            profiles_url: var("PROFILES_URL", "http://localhost:9002/profiles"),
            content_service_url: var("CONTENT_SERVICE_URL", "http://localhost:9003"),
            schedule_service_url: var("SCHEDULE_SERVICE_URL", "http://localhost:9004"),
        }
    }
}
