//! Database Module
//!
//! Handles SQLite connection pool and migrations

pub mod repository;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Database service: owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open `database_url` (WAL mode, foreign keys on) and apply migrations
    ///
    /// An in-memory URL gets a single connection so every query sees the
    /// same database.
    pub async fn new(database_url: &str) -> Result<Self, AppError> {
        let in_memory = database_url.contains(":memory:");

        let mut options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .pragma("foreign_keys", "ON")
            .busy_timeout(std::time::Duration::from_secs(5));
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .optimize_on_close(true, None);
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(in_memory, "Database connection established");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Round-trip a trivial query, returning the latency in milliseconds
    pub async fn ping(pool: &SqlitePool) -> Result<u64, AppError> {
        let started = std::time::Instant::now();
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(started.elapsed().as_millis() as u64)
    }
}
