use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::auth::ROLE_ADMIN;
use crate::error::AppError;

/// Extracts the authenticated user's identity from request extensions.
///
/// This extractor is intended to be used on routes protected by `AuthMiddleware`,
/// which validates the JWT and inserts the decoded [`Claims`] into request
/// extensions. If no claims are present (middleware not applied, or a public
/// route using this extractor by mistake), the request is rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub role: i16,
}

impl AuthenticatedUser {
    /// Guard for catalog mutations: only admins may create, update or delete
    /// categories and products.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role == ROLE_ADMIN {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin access required".into()))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError; // AppError is converted into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().cloned() {
            Some(claims) => ready(Ok(AuthenticatedUser {
                id: claims.sub,
                role: claims.role,
            })),
            None => {
                let err = AppError::Unauthorized(
                    "Authentication required. Ensure AuthMiddleware is active.".to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
