//! Track persistence
//!
//! One table, keyed by track id. Every operation reports enough for the
//! caller to pick 2xx, 404 or 5xx without looking at the database.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreError;

pub use cooltown_common::api::TrackRecord as Track;

/// Result of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// No row existed for the id (201)
    Created,
    /// An existing row was overwritten (204)
    Updated,
}

/// Result of a delete by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Track repository over the process-wide pool
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct TrackRepository {
    pool: SqlitePool,
}

impl TrackRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the tracks table if it does not exist
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tracks (
                id TEXT PRIMARY KEY NOT NULL,
                audio TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(())
    }

    /// Load a track by id
    ///
    /// `Ok(None)` is a miss; `Err` is a storage failure.
    pub async fn get(&self, id: &str) -> Result<Option<Track>, StoreError> {
        let row = sqlx::query_as::<_, (String, String)>("SELECT id, audio FROM tracks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id, audio)| Track { id, audio }))
    }

    /// Update the track, inserting it if no row was updated
    ///
    /// SQLite's `ON CONFLICT DO UPDATE` cannot report which branch ran, so
    /// this stays two statements. A concurrent writer can win the insert
    /// between them; the unique violation is then retried as an update.
    pub async fn put(&self, track: &Track) -> Result<PutOutcome, StoreError> {
        if self.update(track).await? > 0 {
            return Ok(PutOutcome::Updated);
        }

        let inserted = sqlx::query("INSERT INTO tracks (id, audio) VALUES (?, ?)")
            .bind(&track.id)
            .bind(&track.audio)
            .execute(&self.pool)
            .await;

        match inserted {
            Ok(_) => Ok(PutOutcome::Created),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                debug!(track_id = %track.id, "Insert raced with another writer, updating instead");
                self.update(track).await?;
                Ok(PutOutcome::Updated)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, track: &Track) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE tracks SET audio = ? WHERE id = ?")
            .bind(&track.audio)
            .bind(&track.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a track by id
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, StoreError> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        })
    }

    /// List all track ids, ascending
    ///
    /// An empty table is `Ok(vec![])`, never an error.
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        let ids = sqlx::query_scalar::<_, String>("SELECT id FROM tracks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    /// Delete every track, returning how many were removed
    pub async fn clear(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM tracks").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
