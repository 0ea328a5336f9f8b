//! Host directory repository implementation.

use sqlx::PgPool;

use sandops_core::error::{AppError, ErrorKind};
use sandops_core::result::AppResult;
use sandops_entity::host::{Host, HostStatus};

/// Repository for the host location directory.
#[derive(Debug, Clone)]
pub struct HostRepository {
    pool: PgPool,
}

impl HostRepository {
    /// Create a new host repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full host directory.
    pub async fn find_all(&self) -> AppResult<Vec<Host>> {
        sqlx::query_as::<_, Host>("SELECT * FROM hosts ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hosts", e))
    }

    /// Fetch hosts with a given status.
    pub async fn find_by_status(&self, status: HostStatus) -> AppResult<Vec<Host>> {
        sqlx::query_as::<_, Host>("SELECT * FROM hosts WHERE status = $1 ORDER BY name")
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list hosts by status", e)
            })
    }

    /// Count hosts with a given status.
    pub async fn count_by_status(&self, status: HostStatus) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hosts WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count hosts", e))
    }
}
