mod config;
mod db;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

use tower_http::services::ServeDir;

use crate::services::contact::{ContactStore, MemoryContactStore, PgContactStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let contacts: Arc<dyn ContactStore> = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::init_pool(database_url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "using postgres contact store");
            Arc::new(PgContactStore::new(pool))
        }
        None => {
            let store = if config.seed_demo_contacts {
                MemoryContactStore::with_contacts(services::seed::demo_contacts())
            } else {
                MemoryContactStore::new()
            };
            if store.is_empty().await {
                tracing::warn!("DATABASE_URL not set, using an empty in-memory contact store");
            } else {
                tracing::warn!(contacts = store.len().await, "DATABASE_URL not set, using seeded in-memory contact store");
            }
            Arc::new(store)
        }
    };

    let state = state::AppState::new(contacts);
    let app = routes::app(state).nest_service("/static", ServeDir::new(&config.static_dir));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "contacts listening");
    axum::serve(listener, app).await.expect("server failed");
}
