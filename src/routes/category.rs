use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{slugify, Category, CategoryInput},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Lists all categories, ordered by name. Public.
#[get("")]
pub async fn list_categories(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, slug, created_at FROM categories ORDER BY name",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// Fetches a single category by its slug. Public.
///
/// ## Responses:
/// - `200 OK`: Returns the `Category` as JSON.
/// - `404 Not Found`: No category with that slug.
#[get("/{slug}")]
pub async fn get_category(
    pool: web::Data<PgPool>,
    slug: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, slug, created_at FROM categories WHERE slug = $1",
    )
    .bind(slug.into_inner())
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Category not found".into()))?;

    Ok(HttpResponse::Ok().json(category))
}

/// Creates a new category. Admin only.
///
/// The slug is derived from the name; a duplicate slug is rejected with 400.
///
/// ## Responses:
/// - `201 Created`: Returns the new `Category` as JSON.
/// - `400 Bad Request`: A category with the same slug already exists.
/// - `401 Unauthorized` / `403 Forbidden`: Missing token or non-admin caller.
/// - `422 Unprocessable Entity`: Name fails validation.
#[post("")]
pub async fn create_category(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    category_data: web::Json<CategoryInput>,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;
    category_data.validate()?;

    let slug = slugify(&category_data.name);

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM categories WHERE slug = $1")
        .bind(&slug)
        .fetch_optional(&**pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::BadRequest("Category already exists".into()));
    }

    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, slug) VALUES ($1, $2)
         RETURNING id, name, slug, created_at",
    )
    .bind(&category_data.name)
    .bind(&slug)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(category))
}

/// Renames a category. Admin only. The slug is re-derived from the new name;
/// renaming onto an existing slug is a 400.
#[put("/{id}")]
pub async fn update_category(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    id: web::Path<i32>,
    category_data: web::Json<CategoryInput>,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;
    category_data.validate()?;

    let slug = slugify(&category_data.name);

    // fetch_one maps a missing row to RowNotFound, which From<sqlx::Error>
    // turns into a 404.
    let category = sqlx::query_as::<_, Category>(
        "UPDATE categories SET name = $1, slug = $2 WHERE id = $3
         RETURNING id, name, slug, created_at",
    )
    .bind(&category_data.name)
    .bind(&slug)
    .bind(id.into_inner())
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(category))
}

/// Deletes a category. Admin only.
#[delete("/{id}")]
pub async fn delete_category(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;

    let deleted: Option<(i32,)> = sqlx::query_as("DELETE FROM categories WHERE id = $1 RETURNING id")
        .bind(id.into_inner())
        .fetch_optional(&**pool)
        .await?;

    if deleted.is_none() {
        return Err(AppError::NotFound("Category not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Category deleted" })))
}
