//! Project entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ProjectStatus;

/// A coordination project (supply drive, onboarding push, route change).
///
/// Projects feed the collective-achievements report view; the reporting
/// pipeline never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Short project title.
    pub title: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Free-form priority label ("high", "medium", "low").
    pub priority: String,
    /// Volunteer or committee the project is assigned to.
    pub assigned_to: Option<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// Target completion date.
    pub due_date: Option<NaiveDate>,
}
