//! In-memory post repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quire_core::domain::{NewPost, Post, PostChanges, PostId};
use quire_core::error::RepoError;
use quire_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Store {
    posts: HashMap<PostId, Post>,
    last_id: PostId,
}

/// In-memory post repository using a HashMap with async RwLock.
///
/// Ids start at 1 and are never reused, matching an auto-increment column.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let post = Post {
            id: store.last_id,
            title: new_post.title,
            content: new_post.content,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        changes.apply_to(post, Utc::now());

        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("A", "B")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(NewPost::new("A", "B")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(NewPost::new("C", "D")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("A", "B")).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
        assert!(matches!(
            repo.delete(created.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let repo = InMemoryPostRepository::new();
        for title in ["one", "two", "three"] {
            repo.create(NewPost::new(title, "body")).await.unwrap();
        }

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["three", "two", "one"]);
    }
}
