use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::slugify;

/// Input structure for creating or updating a product.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    /// The display name of the product.
    /// Must be between 1 and 200 characters; the slug is derived from it.
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    /// An optional description for the product.
    /// Maximum length of 2000 characters if provided.
    #[validate(length(max = 2000))]
    pub description: Option<String>,

    /// Unit price. Must not be negative.
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Units in stock. Must not be negative.
    #[validate(range(min = 0))]
    pub quantity: i32,

    /// Whether the product requires shipping (as opposed to in-store pickup).
    #[serde(default)]
    pub shipping: bool,

    /// Category the product belongs to. Must reference an existing category.
    pub category_id: i32,
}

/// Represents a product entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique identifier for the product (UUID v4).
    pub id: Uuid,
    /// The display name of the product.
    pub name: String,
    /// URL slug derived from the name; the public lookup key.
    pub slug: String,
    /// An optional description for the product.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: i32,
    /// Whether the product requires shipping.
    pub shipping: bool,
    /// Category the product belongs to.
    pub category_id: i32,
    /// Timestamp of when the product was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the product.
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for filtering the product listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Filter by category id.
    pub category: Option<i32>,
    /// Search term matched case-insensitively against name and description.
    pub search: Option<String>,
    /// Lower price bound, inclusive.
    pub min_price: Option<f64>,
    /// Upper price bound, inclusive.
    pub max_price: Option<f64>,
}

impl Product {
    /// Creates a new `Product` from a validated `ProductInput`.
    /// Sets `created_at`/`updated_at` to now, `id` to a fresh UUID, and
    /// derives the slug from the name.
    pub fn new(input: ProductInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&input.name),
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            shipping: input.shipping,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sample_input() -> ProductInput {
        ProductInput {
            name: "Monstera Deliciosa".to_string(),
            description: Some("A large-leafed tropical houseplant.".to_string()),
            price: 29.99,
            quantity: 12,
            shipping: true,
            category_id: 1,
        }
    }

    #[test]
    fn test_product_input_validation() {
        assert!(sample_input().validate().is_ok());

        let mut negative_price = sample_input();
        negative_price.price = -1.0;
        assert!(negative_price.validate().is_err());

        let mut negative_quantity = sample_input();
        negative_quantity.quantity = -3;
        assert!(negative_quantity.validate().is_err());

        let mut empty_name = sample_input();
        empty_name.name = String::new();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_product_new_derives_slug_and_timestamps() {
        let product = Product::new(sample_input());
        assert_eq!(product.slug, "monstera-deliciosa");
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.category_id, 1);
    }
}
