//! Sandwich collection repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use sandops_core::error::{AppError, ErrorKind};
use sandops_core::result::AppResult;
use sandops_entity::collection::SandwichCollection;

/// Repository for sandwich collection records.
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    /// Create a new collection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every collection record, oldest first.
    ///
    /// The reporting pipeline slices windows out of this in memory so a
    /// single report request issues a single collection query.
    pub async fn find_all(&self) -> AppResult<Vec<SandwichCollection>> {
        sqlx::query_as::<_, SandwichCollection>(
            "SELECT * FROM sandwich_collections ORDER BY collection_date, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list collections", e))
    }

    /// Fetch collections with `collection_date` in the inclusive range.
    pub async fn find_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SandwichCollection>> {
        sqlx::query_as::<_, SandwichCollection>(
            "SELECT * FROM sandwich_collections \
             WHERE collection_date BETWEEN $1 AND $2 \
             ORDER BY collection_date, id",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list collections in range", e)
        })
    }

    /// Count all collection records.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sandwich_collections")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count collections", e)
            })
    }
}
