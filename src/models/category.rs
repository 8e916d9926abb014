use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A catalog category as stored in the database and returned by the API.
/// The slug is derived from the name on create/update and is the public
/// lookup key (`GET /api/v1/category/{slug}`).
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Input payload for creating or renaming a category.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CategoryInput {
    /// Display name, 1 to 100 characters.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
