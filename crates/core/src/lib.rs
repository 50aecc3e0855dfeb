//! `copyforge-core` — domain model and pure logic for the content wizard.
//!
//! This crate has zero internal dependencies so it can be used by the
//! service-client layer, the wizard engine, and the API without cycles.
//! Everything here is synchronous and side-effect free: data types,
//! validation, the wizard step machine, the outline edit reducer, and the
//! batch phase state machine. Network I/O lives in `copyforge-services`.

pub mod batch;
pub mod content;
pub mod editor;
pub mod error;
pub mod headings;
pub mod idea;
pub mod medium;
pub mod outline;
pub mod steps;

pub use error::CoreError;
