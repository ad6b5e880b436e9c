//! HTTP handlers and route configuration.

mod posts;
pub mod preview;

use actix_web::{HttpResponse, web};

use crate::middleware::api_key::ApiKeyGuard;
use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Everything under `/api/` is the JSON API; every other path, bare `/api`
/// included, renders the comments preview.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // A scope also claims its bare prefix, so `/api` is pinned to the preview first.
    cfg.service(web::resource("/api").to(preview::index)).service(
        web::scope("/api")
            .wrap(ApiKeyGuard)
            .app_data(json_config())
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/posts/{id:\\d+}")
                    .route(web::get().to(posts::get_post))
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post))
                    .default_service(web::to(method_not_allowed)),
            )
            .default_service(web::to(not_found)),
    )
    .default_service(web::to(preview::index));
}

/// Request bodies are read as JSON whatever their `Content-Type`; anything
/// that does not deserialize into the expected shape is rejected.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, req| {
            tracing::debug!(path = %req.path(), error = %err, "Rejected request body");
            AppError::MalformedRequest.into()
        })
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::route_not_found())
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
