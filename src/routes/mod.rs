pub mod auth;
pub mod category;
pub mod health;
pub mod product;
pub mod spa;

use actix_web::web;

/// Mounts the three API route groups. Called with the `/api/v1` scope in
/// `main.rs`, so the full prefixes are `/api/v1/auth`, `/api/v1/category`
/// and `/api/v1/product`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register)
            .service(auth::profile),
    )
    .service(
        web::scope("/category")
            .service(category::list_categories)
            .service(category::get_category)
            .service(category::create_category)
            .service(category::update_category)
            .service(category::delete_category),
    )
    .service(
        web::scope("/product")
            .service(product::list_products)
            .service(product::get_product)
            .service(product::create_product)
            .service(product::update_product)
            .service(product::delete_product),
    );
}
