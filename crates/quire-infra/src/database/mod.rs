//! Database connection management and SQL repositories.

mod connections;

#[cfg(feature = "database")]
mod sql_base;
#[cfg(feature = "database")]
pub mod sql_repo;

#[cfg(feature = "database")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "database")]
pub use connections::connect;
#[cfg(feature = "database")]
pub use sql_repo::{SqlCommentRepository, SqlPostRepository};
