use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use models::store::WishStore;
use service::wish::WishService;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks.
/// `PORT` is honored for deployment compatibility.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("PORT")
                .or_else(|_| env::var("SERVER_PORT"))
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: open the store, ensure the schema, build the app and run
/// the HTTP server. A store failure after this point degrades individual
/// requests to 503; it never takes the process down.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let database_url = models::db::DATABASE_URL.clone();
    common::env::ensure_db_dir(&database_url).await?;

    let db_cfg = configs::load_default()
        .map(|c| c.database)
        .unwrap_or_default();
    let store = WishStore::connect_with_config(&database_url, &db_cfg).await?;
    store.initialize().await?;

    let state = ServerState {
        wishes: WishService::new(store),
    };
    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr()?;
    info!(%addr, database_url = %database_url, "starting wishlist server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
