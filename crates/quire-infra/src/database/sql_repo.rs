//! SQL repository implementations (PostgreSQL and SQLite via SeaORM).

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Asterisk, Query};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DbConn, EntityTrait, FromQueryResult,
    IntoActiveModel, JsonValue, QueryOrder, Set,
};

use quire_core::domain::{NewPost, Post, PostChanges, PostId};
use quire_core::error::RepoError;
use quire_core::ports::{CommentRepository, PostRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::sql_base::{SqlBaseRepository, map_db_err};

/// SQL post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        tracing::debug!("Listing posts");

        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(new_post.title),
            content: Set(new_post.content),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post created");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = existing.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = id, "Post updated");
        Ok(model.into())
    }
}

/// Raw read access to the `comments` table.
pub struct SqlCommentRepository {
    db: DbConn,
}

impl SqlCommentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for SqlCommentRepository {
    async fn first_rows(&self, limit: u64) -> Result<Vec<JsonValue>, RepoError> {
        tracing::debug!(limit, "Fetching comment rows");

        let query = Query::select()
            .column(Asterisk)
            .from(Alias::new("comments"))
            .limit(limit)
            .to_owned();
        let statement = self.db.get_database_backend().build(&query);

        JsonValue::find_by_statement(statement)
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }
}
