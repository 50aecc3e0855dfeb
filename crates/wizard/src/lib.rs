//! `copyforge-wizard` — the content wizard session engine (PRD-31..35).
//!
//! Owns the per-session state (idea config, draft pieces, project/profile
//! selection, finalized items) and the operations that drive the wizard:
//! idea generation, final content generation with deferred project
//! resolution, and the batch save-and-schedule coordinator. All network
//! access goes through the trait seams in `copyforge-services`, so every
//! operation here is tested against in-memory fakes.

pub mod coordinator;
pub mod error;
pub mod generate;
pub mod ideas;
pub mod progress;
pub mod resolve;
pub mod session;

pub use error::WizardError;
pub use resolve::ProjectSelection;
pub use session::WizardSession;
