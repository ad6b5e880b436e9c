//! # Quire API Server
//!
//! HTTP surface of the Quire posts service: a JSON CRUD API under `/api`
//! and an HTML comments preview everywhere else.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::{ApiKey, AppConfig};
pub use state::AppState;
