//! User Management API
//!
//! A minimal user-management backend: CRUD over a single `User` entity,
//! exposed through HTTP and validated with a handful of business rules
//! (username format, reserved-username blacklist, uniqueness and
//! existence checks).

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use config::StorageBackend;
use infrastructure::migrations::PostgresMigrator;
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository, UserService};

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// Services are constructed and wired explicitly; the storage backend is
/// selected from the configuration.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let reserved_usernames = config.users.reserved_usernames.clone();

    info!("Storage backend: {:?}", config.storage.backend);

    let user_service: Arc<dyn api::state::UserServiceTrait> = match config.storage.backend {
        StorageBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pg_pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            PostgresMigrator::new(pg_pool.clone())
                .run()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

            let repository = Arc::new(PostgresUserRepository::new(pg_pool));
            Arc::new(UserService::new(repository, reserved_usernames))
        }
        StorageBackend::Memory => {
            let repository = Arc::new(InMemoryUserRepository::new());
            Arc::new(UserService::new(repository, reserved_usernames))
        }
    };

    Ok(AppState { user_service })
}
