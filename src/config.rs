use std::env;

/// Process configuration, resolved from the environment exactly once at startup.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    /// Free-form deployment mode label (`DEV_MODE`), used only in the startup
    /// log line. Absent means absent; no default is substituted.
    pub dev_mode: Option<String>,
    /// Directory holding the pre-built storefront bundle.
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            dev_mode: env::var("DEV_MODE").ok(),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "client/public".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
