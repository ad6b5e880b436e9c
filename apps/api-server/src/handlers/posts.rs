//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use quire_core::DomainError;
use quire_core::domain::{NewPost, PostChanges, PostId};
use quire_shared::ApiResponse;
use quire_shared::dto::{CreatePostRequest, DeletedPost, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse the `{id}` path segment.
///
/// The route only admits decimal digits, so the sole failure is overflow,
/// which maps to id 0. No stored post has id 0, so the request ends up as
/// "Post not found".
pub fn parse_post_id(raw: &str) -> PostId {
    raw.parse().unwrap_or(0)
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .find_all()
        .await
        .map_err(AppError::storage("Failed to fetch posts"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path);

    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(AppError::storage("Failed to fetch post"))?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /api/posts - Protected route
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost::new(req.title, req.content))
        .await
        .map_err(AppError::storage("Failed to create post"))?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// PUT /api/posts/{id} - Protected route
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path);
    let req = body.into_inner();

    let changes = PostChanges::new(req.title, req.content);
    changes.ensure_not_empty()?;

    let post = state
        .posts
        .update(id, changes)
        .await
        .map_err(AppError::post_storage(id, "Failed to update post"))?;

    tracing::info!(post_id = id, "Post updated");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id} - Protected route
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path);

    state
        .posts
        .delete(id)
        .await
        .map_err(AppError::post_storage(id, "Failed to delete post"))?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(DeletedPost { id })))
}
