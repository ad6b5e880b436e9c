//! # Quire Infrastructure
//!
//! Concrete implementations of the ports defined in `quire-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `database` - PostgreSQL and SQLite storage via SeaORM

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::{InMemoryCommentRepository, InMemoryPostRepository};

// Re-exports - SQL
pub use database::DatabaseConfig;
#[cfg(feature = "database")]
pub use database::{SqlCommentRepository, SqlPostRepository};
