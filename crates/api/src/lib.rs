//! `copyforge-api` library crate.
//!
//! Re-exports the router, state, and config so integration tests build the
//! exact same application as the production binary in `main.rs`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
