//! Startup sequencer for the PlantX e-commerce server.
//!
//! Runs exactly once per process, in a fixed order: load .env, init logging,
//! resolve config, connect the database pool, build the app (middleware,
//! API route groups, welcome route, static bundle with SPA fallback), then
//! bind and listen for the lifetime of the process. There are no retries and
//! no recovery at this layer; a startup failure crashes the process.

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use plantx::auth::AuthMiddleware;
use plantx::config::Config;
use plantx::error::AppError;
use plantx::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let static_dir = config.static_dir.clone();
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
            )
            .wrap(Logger::default())
            .wrap(cors)
            .service(routes::health::health)
            .service(
                web::scope("/api/v1")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
            // The welcome route is registered ahead of the bundle so it is
            // reachable; the bundle's default handler catches everything else.
            .service(routes::spa::index)
            .service(routes::spa::bundle(&static_dir))
    })
    .bind((config.server_host.as_str(), config.server_port))?;

    log::info!(
        "Server running in {} mode on port {}",
        config.dev_mode.as_deref().unwrap_or_default(),
        config.server_port
    );

    server.run().await
}
