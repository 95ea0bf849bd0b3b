//! Common library for the exercise tracker
//!
//! This crate provides shared functionality used by the tracker service,
//! including database connectivity, schema bootstrap and the storage error
//! taxonomy.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let is_healthy = health_check(&pool).await?;
//!     assert!(is_healthy);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
