//! In-memory comment rows for the preview page.

use async_trait::async_trait;
use serde_json::Value;

use quire_core::error::RepoError;
use quire_core::ports::CommentRepository;

/// Fixed set of comment rows, returned in insertion order.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    rows: Vec<Value>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn first_rows(&self, limit: u64) -> Result<Vec<Value>, RepoError> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.rows.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_first_rows_respects_limit() {
        let repo = InMemoryCommentRepository::with_rows(
            (1..=5).map(|id| json!({ "id": id })).collect(),
        );

        let rows = repo.first_rows(3).await.unwrap();
        assert_eq!(rows, vec![json!({ "id": 1 }), json!({ "id": 2 }), json!({ "id": 3 })]);
    }
}
