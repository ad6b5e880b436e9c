//! Shared-secret check for mutating API methods.

use actix_web::{
    Error, ResponseError,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub static API_KEY_HEADER: &str = "X-API-Key";

/// Methods that change stored state and therefore need the key.
pub fn requires_api_key(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE)
}

/// Middleware rejecting POST/PUT/DELETE requests whose `X-API-Key` header does
/// not exactly equal the configured secret. Runs before routing, body parsing
/// and storage access.
pub struct ApiKeyGuard;

impl<S, B> Transform<S, ServiceRequest> for ApiKeyGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyGuardService { service }))
    }
}

pub struct ApiKeyGuardService<S> {
    service: S,
}

impl<S> ApiKeyGuardService<S> {
    fn is_authorized(req: &ServiceRequest) -> bool {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return false;
        };

        let presented = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        state.api_key.matches(presented)
    }
}

impl<S, B> Service<ServiceRequest> for ApiKeyGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if requires_api_key(req.method()) && !Self::is_authorized(&req) {
            tracing::warn!(
                method = %req.method(),
                path = %req.path(),
                "Rejected request without a valid API key"
            );

            let response = AppError::Unauthorized.error_response();
            let (http_req, _payload) = req.into_parts();
            let srv_response = ServiceResponse::new(http_req, response);

            return Box::pin(async move { Ok(srv_response.map_into_right_body()) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mutating_methods_need_the_key() {
        assert!(requires_api_key(&Method::POST));
        assert!(requires_api_key(&Method::PUT));
        assert!(requires_api_key(&Method::DELETE));
        assert!(!requires_api_key(&Method::GET));
        assert!(!requires_api_key(&Method::PATCH));
        assert!(!requires_api_key(&Method::HEAD));
    }
}
