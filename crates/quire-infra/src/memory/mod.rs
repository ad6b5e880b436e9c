//! In-memory repositories - fallback when no database is configured.

mod comments;
mod posts;

pub use comments::InMemoryCommentRepository;
pub use posts::InMemoryPostRepository;
