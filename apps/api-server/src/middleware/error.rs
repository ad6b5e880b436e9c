//! Error handling - every API failure renders as the `{success:false, error}` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quire_core::error::{DomainError, RepoError};
use quire_shared::ApiResponse;

/// Classified outcome of a failed API request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Validation(String),

    /// Storage fault; only `message` reaches the client.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: RepoError,
    },

    #[error("Internal server error")]
    MalformedRequest,
}

impl AppError {
    /// Unmatched route under the API root.
    pub fn route_not_found() -> Self {
        AppError::NotFound("Not found".to_string())
    }

    /// Wrap any repository failure with a fixed per-operation message.
    pub fn storage(message: &'static str) -> impl FnOnce(RepoError) -> AppError {
        move |source| AppError::Storage { message, source }
    }

    /// Like [`AppError::storage`], but a missing row becomes "Post not found".
    pub fn post_storage(id: i64, message: &'static str) -> impl FnOnce(RepoError) -> AppError {
        move |source| match source {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                id,
            }
            .into(),
            source => AppError::Storage { message, source },
        }
    }
}

impl ResponseError for AppError {
    /// Every failure other than authentication is reported as 400, including
    /// not-found and method-not-allowed; existing clients rely on this.
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage { message, source } = self {
            tracing::error!(error = %source, "{}", message);
        }

        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            err @ DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unauthorized_escapes_400() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::route_not_found().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MethodNotAllowed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MalformedRequest.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_fault_hides_cause() {
        let err = AppError::storage("Failed to fetch posts")(RepoError::Query(
            "no such table: posts".to_string(),
        ));
        assert_eq!(err.to_string(), "Failed to fetch posts");
    }

    #[test]
    fn missing_post_maps_to_not_found() {
        let err = AppError::post_storage(9, "Failed to delete post")(RepoError::NotFound);
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Post not found"));
    }
}
