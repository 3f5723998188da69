pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod infra;
pub mod logging;

use config::{AppConfig, DbLocation};
use error::AppError;
use infra::{init_db, ContactStore, SqliteContactStore};
use std::sync::Arc;

/// Open the database, bind the listener and serve until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    match &config.db {
        DbLocation::File(path) => log::info!("DB path: {:?}", path),
        DbLocation::Memory => log::warn!("DB is in-memory; contacts are lost on exit"),
    }

    let pool = init_db(&config.db).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;
    let store: Arc<dyn ContactStore> = Arc::new(SqliteContactStore::new(pool));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(format!("failed to bind {addr}: {e}")))?;
    log::info!("listening on http://{}", addr);

    axum::serve(listener, http::router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("server error: {e}")))?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutdown requested");
}
