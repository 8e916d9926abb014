use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::verify_token;

/// Bearer-token middleware wrapped around the `/api/v1` scope.
///
/// Public traffic passes through untouched: the auth endpoints themselves and
/// read-only catalog browsing. Everything else must carry a valid token, whose
/// claims are stashed in request extensions for [`super::AuthenticatedUser`].
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

fn is_public(req: &ServiceRequest) -> bool {
    let path = req.path();
    // Exact matches only; a prefix test would open up any future sibling
    // route that happens to extend these names.
    if path == "/api/v1/auth/login" || path == "/api/v1/auth/register" {
        return true;
    }
    // Catalog browsing is open; only mutations require a token.
    let read_only = req.method() == Method::GET || req.method() == Method::HEAD;
    read_only && (path.starts_with("/api/v1/category") || path.starts_with("/api/v1/product"))
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public(&req) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let auth_header = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match auth_header {
            Some(token) => match verify_token(token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(app_err) => Box::pin(async move { Err(app_err.into()) }),
            },
            None => {
                let app_err = crate::error::AppError::Unauthorized("Missing token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn auth_and_catalog_reads_are_public() {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .to_srv_request();
        assert!(is_public(&req));

        let req = test::TestRequest::get()
            .uri("/api/v1/product?search=fern")
            .to_srv_request();
        assert!(is_public(&req));

        let req = test::TestRequest::get()
            .uri("/api/v1/category/indoor-plants")
            .to_srv_request();
        assert!(is_public(&req));
    }

    #[actix_web::test]
    async fn catalog_mutations_require_a_token() {
        let req = test::TestRequest::post()
            .uri("/api/v1/product")
            .to_srv_request();
        assert!(!is_public(&req));

        let req = test::TestRequest::delete()
            .uri("/api/v1/category/3")
            .to_srv_request();
        assert!(!is_public(&req));

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/profile")
            .to_srv_request();
        assert!(!is_public(&req));

        // Paths merely extending the open endpoints stay protected.
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register-admin")
            .to_srv_request();
        assert!(!is_public(&req));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login/other")
            .to_srv_request();
        assert!(!is_public(&req));
    }
}
