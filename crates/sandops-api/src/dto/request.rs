//! Request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sandops_entity::host::HostStatus;

/// Body for `POST /api/reports/weekly-impact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyImpactRequest {
    /// Week-ending date; the latest completed collection week when omitted.
    #[serde(default)]
    pub week_ending_date: Option<NaiveDate>,
}

/// Query for `GET /api/hosts`.
#[derive(Debug, Clone, Deserialize)]
pub struct HostListQuery {
    /// Filter by directory status.
    pub status: Option<HostStatus>,
}

/// Query for `GET /api/collections`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionListQuery {
    /// First collection date to include.
    pub start_date: Option<NaiveDate>,
    /// Last collection date to include.
    pub end_date: Option<NaiveDate>,
}
