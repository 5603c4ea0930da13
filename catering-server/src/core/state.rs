use std::sync::Arc;
use std::time::Instant;

use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

/// Server state shared by all handlers
///
/// Cheap to clone: the pool is reference counted and the config sits
/// behind an `Arc`.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub started_at: Instant,
}

impl ServerState {
    /// Open the database, apply migrations and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        if !config.database_url.contains(":memory:") {
            std::fs::create_dir_all(&config.work_dir).map_err(|e| {
                ServerError::Database(format!("Cannot create work dir {}: {e}", config.work_dir))
            })?;
        }

        let db = DbService::new(&config.database_url)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// Build the state around an existing pool
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self {
            config: Arc::new(config),
            pool,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
