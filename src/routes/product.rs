use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Product, ProductInput, ProductQuery},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

const PRODUCT_COLUMNS: &str =
    "id, name, slug, description, price, quantity, shipping, category_id, created_at, updated_at";

/// Lists products, newest first. Public.
///
/// Filter conditions are appended dynamically for whichever query parameters
/// are present.
///
/// ## Query Parameters:
/// - `category` (optional): Filters by category id.
/// - `search` (optional): Case-insensitive match against name and description.
/// - `min_price` / `max_price` (optional): Inclusive price bounds.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Product` objects.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
#[allow(unused_assignments)]
pub async fn list_products(
    pool: web::Data<PgPool>,
    query_params: web::Query<ProductQuery>,
) -> Result<impl Responder, AppError> {
    let mut sql = format!("SELECT {} FROM products", PRODUCT_COLUMNS);
    let mut param_count = 1;

    let mut conditions: Vec<String> = Vec::new();

    if query_params.category.is_some() {
        conditions.push(format!("category_id = ${}", param_count));
        param_count += 1;
    }
    if query_params.min_price.is_some() {
        conditions.push(format!("price >= ${}", param_count));
        param_count += 1;
    }
    if query_params.max_price.is_some() {
        conditions.push(format!("price <= ${}", param_count));
        param_count += 1;
    }
    if query_params.search.is_some() {
        conditions.push(format!(
            "(name ILIKE ${} OR description ILIKE ${})",
            param_count,
            param_count + 1
        ));
        param_count += 2;
    }

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    sql.push_str(" ORDER BY created_at DESC");

    let mut query_builder = sqlx::query_as::<_, Product>(&sql);

    if let Some(category) = query_params.category {
        query_builder = query_builder.bind(category);
    }
    if let Some(min_price) = query_params.min_price {
        query_builder = query_builder.bind(min_price);
    }
    if let Some(max_price) = query_params.max_price {
        query_builder = query_builder.bind(max_price);
    }
    if let Some(search) = &query_params.search {
        let search_pattern = format!("%{}%", search);
        query_builder = query_builder.bind(search_pattern.clone());
        query_builder = query_builder.bind(search_pattern);
    }

    let products = query_builder.fetch_all(&**pool).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Fetches a single product by its slug. Public.
#[get("/{slug}")]
pub async fn get_product(
    pool: web::Data<PgPool>,
    slug: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE slug = $1",
        PRODUCT_COLUMNS
    ))
    .bind(slug.into_inner())
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    Ok(HttpResponse::Ok().json(product))
}

/// Creates a new product. Admin only.
///
/// ## Request Body:
/// A JSON object matching `ProductInput`: `name` (required), `description`
/// (optional), `price`, `quantity`, `shipping` (defaults to false),
/// `category_id` (must reference an existing category).
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Product` as JSON.
/// - `400 Bad Request`: Unknown `category_id`, or another product already
///   owns the slug derived from the name.
/// - `401 Unauthorized` / `403 Forbidden`: Missing token or non-admin caller.
/// - `422 Unprocessable Entity`: Input validation failure.
#[post("")]
pub async fn create_product(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    product_data: web::Json<ProductInput>,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;
    product_data.validate()?;

    let category: Option<(i32,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
        .bind(product_data.category_id)
        .fetch_optional(&**pool)
        .await?;

    if category.is_none() {
        return Err(AppError::BadRequest("Unknown category".into()));
    }

    let product = Product::new(product_data.into_inner());

    let result = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (id, name, slug, description, price, quantity, shipping, category_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {}",
        PRODUCT_COLUMNS
    ))
    .bind(product.id)
    .bind(product.name)
    .bind(product.slug)
    .bind(product.description)
    .bind(product.price)
    .bind(product.quantity)
    .bind(product.shipping)
    .bind(product.category_id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(result))
}

/// Replaces a product's fields. Admin only. The slug is re-derived from the
/// name and `updated_at` is bumped. Renaming onto an existing slug is a 400.
#[put("/{id}")]
pub async fn update_product(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    id: web::Path<Uuid>,
    product_data: web::Json<ProductInput>,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;
    product_data.validate()?;

    let input = product_data.into_inner();
    let slug = crate::models::slugify(&input.name);

    let product = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products
         SET name = $1, slug = $2, description = $3, price = $4, quantity = $5,
             shipping = $6, category_id = $7, updated_at = NOW()
         WHERE id = $8
         RETURNING {}",
        PRODUCT_COLUMNS
    ))
    .bind(input.name)
    .bind(slug)
    .bind(input.description)
    .bind(input.price)
    .bind(input.quantity)
    .bind(input.shipping)
    .bind(input.category_id)
    .bind(id.into_inner())
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Deletes a product. Admin only.
#[delete("/{id}")]
pub async fn delete_product(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;

    let deleted: Option<(Uuid,)> =
        sqlx::query_as("DELETE FROM products WHERE id = $1 RETURNING id")
            .bind(id.into_inner())
            .fetch_optional(&**pool)
            .await?;

    if deleted.is_none() {
        return Err(AppError::NotFound("Product not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted" })))
}
