//! `copyforge-services` — typed HTTP clients for the external collaborator
//! services (PRD-33/34/35).
//!
//! Content generation, project/profile storage, content persistence, and
//! scheduling all live in independently-owned HTTP services; this crate
//! owns their wire contracts. Each endpoint gets explicit request/response
//! DTOs parsed at the boundary, and each service is fronted by an
//! `async_trait` trait so the wizard engine can be tested against
//! in-memory fakes.

pub mod config;
pub mod content_store;
pub mod contents;
pub mod error;
mod http;
pub mod profiles;
pub mod projects;
pub mod schedule;
pub mod strategy;
pub mod traits;

pub use config::ServiceEndpoints;
pub use error::ServiceError;
pub use traits::{
    ContentService, ContentStore, ProfileService, ProjectService, ScheduleService,
    StrategyService,
};
