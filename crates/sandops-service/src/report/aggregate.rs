//! Window aggregation over raw collection records.
//!
//! This is the single aggregation core; every report view is a projection of
//! [`WindowAggregate`] values produced here.

use std::collections::BTreeMap;

use sandops_entity::collection::SandwichCollection;

use super::window::DateRange;

/// Name used for records submitted without a host.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Accumulated totals for one location within a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationTotals {
    /// Individual sandwiches.
    pub individual: i64,
    /// Group-collection sandwiches.
    pub group: i64,
    /// `individual + group`.
    pub total: i64,
}

/// Aggregated metrics for one date range.
#[derive(Debug, Clone, Default)]
pub struct WindowAggregate {
    /// Total sandwiches in the range.
    pub total: i64,
    /// Group-collection sandwiches in the range.
    pub group_total: i64,
    /// Locations with a non-zero total in the range.
    pub active_locations: usize,
    /// Size of the host directory, independent of range participation.
    pub total_locations: usize,
    /// Per-location totals, keyed by host name.
    pub locations: BTreeMap<String, LocationTotals>,
}

impl WindowAggregate {
    /// Average sandwiches per active location; `0.0` when nothing came in.
    pub fn avg_per_location(&self) -> f64 {
        if self.active_locations > 0 {
            self.total as f64 / self.active_locations as f64
        } else {
            0.0
        }
    }

    /// Window total for a named location, zero when it did not collect.
    pub fn location_total(&self, name: &str) -> i64 {
        self.locations.get(name).map_or(0, |t| t.total)
    }
}

/// Reduce raw records to per-location and overall totals for a range.
///
/// `total_locations` is the host-directory size, not the number of locations
/// seen in the range — it expresses how many locations *could* have
/// participated.
pub fn aggregate_range(
    records: &[SandwichCollection],
    range: DateRange,
    total_locations: usize,
) -> WindowAggregate {
    let mut locations: BTreeMap<String, LocationTotals> = BTreeMap::new();
    let mut total = 0i64;
    let mut group_total = 0i64;

    for record in records {
        if !range.contains(record.collection_date) {
            continue;
        }
        let name = if record.host_name.trim().is_empty() {
            UNKNOWN_LOCATION.to_string()
        } else {
            record.host_name.clone()
        };
        let entry = locations.entry(name).or_default();
        entry.individual += i64::from(record.individual_sandwiches);
        entry.group += record.group_total();
        entry.total += record.total();
        total += record.total();
        group_total += record.group_total();
    }

    let active_locations = locations.values().filter(|t| t.total > 0).count();

    WindowAggregate {
        total,
        group_total,
        active_locations,
        total_locations,
        locations,
    }
}

/// Means over the four prior weekly aggregates, rounded to whole sandwiches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FourWeekAverages {
    /// Mean weekly total.
    pub total: i64,
    /// Mean active-location count.
    pub active_locations: i64,
    /// Mean group-collection total.
    pub group_total: i64,
    /// Mean of the weekly per-location averages.
    pub per_location: f64,
}

/// Average a set of weekly aggregates (typically the four prior windows).
pub fn four_week_averages(weeks: &[WindowAggregate]) -> FourWeekAverages {
    if weeks.is_empty() {
        return FourWeekAverages::default();
    }
    let n = weeks.len() as f64;
    let mean = |sum: i64| (sum as f64 / n).round() as i64;

    FourWeekAverages {
        total: mean(weeks.iter().map(|w| w.total).sum()),
        active_locations: mean(weeks.iter().map(|w| w.active_locations as i64).sum()),
        group_total: mean(weeks.iter().map(|w| w.group_total).sum()),
        per_location: (weeks.iter().map(WindowAggregate::avg_per_location).sum::<f64>() / n)
            .round(),
    }
}
