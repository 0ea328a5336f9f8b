//! Host entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::HostStatus;

/// A location/organization that hosts collection events.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Host {
    /// Unique host identifier.
    pub id: Uuid,
    /// Display name; collections reference hosts by this name.
    pub name: String,
    /// Street address (optional).
    pub address: Option<String>,
    /// Whether the host currently participates.
    pub status: HostStatus,
    /// Coordinator notes.
    pub notes: Option<String>,
    /// When the host joined the directory.
    pub created_at: DateTime<Utc>,
}

impl Host {
    /// Check whether this host is expected to collect in a given week.
    pub fn is_active(&self) -> bool {
        self.status == HostStatus::Active
    }
}
