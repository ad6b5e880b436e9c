use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Storage-assigned post identifier.
pub type PostId = i64;

/// Post entity - a titled text record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by a client when creating a post.
///
/// The id and both timestamps are assigned by the repository on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial update of a post.
///
/// Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            content: content.filter(|c| !c.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Reject an update that would only refresh the timestamp.
    pub fn ensure_not_empty(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation("No fields to update".to_string()));
        }
        Ok(())
    }

    /// Apply the changes in place and stamp `updated_at`.
    pub fn apply_to(self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        post.updated_at = now;
    }
}
