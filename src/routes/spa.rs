//! Storefront serving: the root welcome page, the static client bundle, and
//! the single-page-app fallback.
//!
//! Registration order in `main.rs` matters: the API scope and the welcome
//! route are mounted first, then [`bundle`] catches everything else. Files
//! that exist in the bundle directory are served as-is; any other path gets
//! `index.html` with HTTP 200 so the client-side router can take over.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{get, HttpResponse, Responder};
use std::path::Path;

/// `GET /` — fixed welcome page.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Welcome to the ecommerce website</h1>")
}

/// Static file service rooted at `static_dir`, with `index.html` as the
/// not-found default (SPA fallback).
pub fn bundle(static_dir: &str) -> Files {
    let entry = Path::new(static_dir).join("index.html");
    Files::new("/", static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let entry = entry.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&entry).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}
