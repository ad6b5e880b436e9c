//! Application state - shared across all handlers.

use std::sync::Arc;

use quire_core::ports::{CommentRepository, PostRepository};
use quire_infra::{InMemoryCommentRepository, InMemoryPostRepository};

#[cfg(feature = "database")]
use quire_infra::{SqlCommentRepository, SqlPostRepository};

use crate::config::{ApiKey, AppConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub api_key: ApiKey,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "database")]
        let state = match &config.database {
            Some(db_config) => match quire_infra::database::connect(db_config).await {
                Ok(conn) => Self::with_repositories(
                    Arc::new(SqlPostRepository::new(conn.clone())),
                    Arc::new(SqlCommentRepository::new(conn)),
                    config.api_key.clone(),
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory(config.api_key.clone())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory(config.api_key.clone())
            }
        };

        #[cfg(not(feature = "database"))]
        let state = {
            tracing::info!("Running without database feature - using in-memory repositories");
            Self::in_memory(config.api_key.clone())
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by empty in-memory repositories.
    pub fn in_memory(api_key: ApiKey) -> Self {
        Self::with_repositories(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
            api_key,
        )
    }

    pub fn with_repositories(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        api_key: ApiKey,
    ) -> Self {
        Self {
            posts,
            comments,
            api_key,
        }
    }
}
