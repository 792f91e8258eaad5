use std::{env, time::Duration};

use configs::DatabaseConfig;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }
    if let Ok(path) = env::var("DB_FILE_NAME") {
        return format!("sqlite://{path}?mode=rwc");
    }
    match configs::load_default() {
        Ok(cfg) if !cfg.database.url.trim().is_empty() => cfg.database.url,
        _ => "sqlite://wishlist.db?mode=rwc".to_string(),
    }
});

pub async fn connect_to(url: &str, cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(cfg.max_connections.max(1))
        .min_connections(cfg.min_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs.max(1)))
        .sqlx_logging(cfg.sqlx_logging);
    // Every pooled connection to an in-memory SQLite database gets its own
    // empty database, so the pool must stay at a single connection.
    if url.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    }
    Database::connect(opts).await
}
