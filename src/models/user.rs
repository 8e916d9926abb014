use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account. The password hash never leaves the database layer;
/// this struct is the API-facing shape.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// 0 = customer, 1 = admin (see `auth::ROLE_USER` / `auth::ROLE_ADMIN`).
    pub role: i16,
    pub created_at: DateTime<Utc>,
}
