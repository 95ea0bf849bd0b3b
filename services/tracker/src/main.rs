use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod directory;
mod error;
mod exercise_log;
mod extract;
mod models;
mod repositories;
mod routes;
mod settings;
mod state;
mod validation;

use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use tokio::net::TcpListener;

use crate::{
    repositories::{MemoryStore, PgExerciseStore, PgUserStore},
    settings::{AppConfig, StorageBackend},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting exercise tracker service");

    let config = AppConfig::load()?;

    let app_state = match config.storage {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = init_pool(&db_config).await?;

            // Check database connectivity
            if health_check(&pool).await? {
                info!("Database connection successful");
            } else {
                anyhow::bail!("Failed to connect to database");
            }

            run_migrations(&pool).await?;

            AppState::new(
                Arc::new(PgUserStore::new(pool.clone())),
                Arc::new(PgExerciseStore::new(pool)),
            )
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data will not survive a restart");
            let store = Arc::new(MemoryStore::new());
            AppState::new(store.clone(), store)
        }
    };

    let app = routes::create_router(app_state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Exercise tracker listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down exercise tracker service");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
