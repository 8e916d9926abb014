//! Database pool setup.
//!
//! The pool is created exactly once by the startup sequence in `main.rs` and
//! handed to every worker through `web::Data`. Connection failure at startup
//! is fatal; this layer does not retry or degrade.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
