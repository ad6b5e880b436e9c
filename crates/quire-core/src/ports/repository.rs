use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Generic repository trait for keyed lookups and removal.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// All posts, newest `created_at` first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Insert a post; the repository assigns the id and stamps both timestamps
    /// with the same instant.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Apply `changes` and refresh `updated_at`.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError>;
}

/// Read-only access to the comments table used by the preview page.
///
/// Rows are opaque and surfaced as JSON objects keyed by column name.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// At most `limit` rows, in the storage engine's default order.
    async fn first_rows(&self, limit: u64) -> Result<Vec<serde_json::Value>, RepoError>;
}
