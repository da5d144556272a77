//! Database access for cooltown-tracks

pub mod tracks;

pub use tracks::{DeleteOutcome, PutOutcome, Track, TrackRepository};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

use crate::error::StoreError;

const MAX_CONNECTIONS: u32 = 8;
const BUSY_TIMEOUT_MS: u64 = 5000;

/// Open (creating if needed) the track database and ensure its schema
///
/// The pool is shared by every in-flight request.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool, StoreError> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            StoreError::Unavailable(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }

    tracing::debug!("Connecting to database: {}", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(db_path)
                .create_if_missing(true)
                .busy_timeout(Duration::from_millis(BUSY_TIMEOUT_MS))
                .journal_mode(SqliteJournalMode::Wal),
        )
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    TrackRepository::new(pool.clone()).create_schema().await?;
    tracing::info!("Database tables initialized (tracks)");

    Ok(pool)
}
