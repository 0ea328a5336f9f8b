//! Collection entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One submitted record of sandwiches gathered at a host location on a date.
///
/// Immutable input for the reporting pipeline; rows are written by the
/// collection-logging flow and only ever read here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SandwichCollection {
    /// Serial row identifier.
    pub id: i64,
    /// The date the collection took place.
    pub collection_date: NaiveDate,
    /// Host location the collection was submitted for.
    pub host_name: String,
    /// Sandwiches made by individual volunteers.
    pub individual_sandwiches: i32,
    /// Sandwiches from the first group collection.
    pub group1_count: i32,
    /// Sandwiches from the second group collection.
    pub group2_count: i32,
    /// When the record was submitted.
    pub submitted_at: DateTime<Utc>,
}

impl SandwichCollection {
    /// Sandwiches from group collections on this record.
    pub fn group_total(&self) -> i64 {
        i64::from(self.group1_count) + i64::from(self.group2_count)
    }

    /// Total sandwiches on this record, individual and group combined.
    pub fn total(&self) -> i64 {
        i64::from(self.individual_sandwiches) + self.group_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(individual: i32, group1: i32, group2: i32) -> SandwichCollection {
        SandwichCollection {
            id: 1,
            collection_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            host_name: "Alpharetta".to_string(),
            individual_sandwiches: individual,
            group1_count: group1,
            group2_count: group2,
            submitted_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_totals() {
        let rec = record(300, 100, 50);
        assert_eq!(rec.group_total(), 150);
        assert_eq!(rec.total(), 450);
    }

    #[test]
    fn test_empty_record_totals_zero() {
        assert_eq!(record(0, 0, 0).total(), 0);
    }
}
