//! The weekly impact report structure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::location::LocationReport;

/// The full weekly impact report.
///
/// `metrics_table.total_sandwiches.this_week` always equals the sum of
/// `locations[].total` for the same window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Date the report was generated.
    pub report_date: NaiveDate,
    /// The 7-day collection window the report covers.
    pub collection_week: CollectionWeek,
    /// Headline numbers.
    pub summary: WeeklySummary,
    /// Four metrics compared across periods.
    pub metrics_table: MetricsTable,
    /// Per-location breakdown, ordered by status priority then total.
    pub locations: Vec<LocationReport>,
    /// Patterns, seasonal notes, and chart data.
    pub trends_insights: TrendsInsights,
    /// Preparation checklist for the coming week.
    pub next_week_prep: NextWeekPrep,
    /// Milestones and stories worth celebrating.
    pub success_celebration: SuccessCelebration,
}

/// Inclusive 7-day span of the collection week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollectionWeek {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

/// Headline numbers for the collection week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Total sandwiches collected in the window.
    pub total_sandwiches: i64,
    /// Locations that collected anything this week.
    pub active_locations: usize,
    /// Active hosts in the directory, whether or not they collected.
    pub total_locations: usize,
    /// `active_locations / total_locations`; `null` with an empty directory.
    pub participation_rate: Option<f64>,
    /// Relative change versus last week; `null` when last week had no data.
    pub week_over_week_change: Option<f64>,
    /// Progress toward the configured monthly goal.
    pub monthly_progress: MonthlyProgress,
}

/// Month-to-date progress toward the sandwich goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyProgress {
    /// Sandwiches collected so far this calendar month.
    pub current: i64,
    /// Configured monthly goal.
    pub goal: i64,
    /// `current / goal`.
    pub percentage: f64,
}

/// One metric across the comparison periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricRow<T> {
    /// Value for the report window.
    pub this_week: T,
    /// Value for the immediately prior window.
    pub last_week: T,
    /// `this_week - last_week`.
    pub change: T,
    /// Mean over the four prior non-overlapping windows.
    pub four_week_avg: T,
}

/// The key-metrics grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsTable {
    /// Total sandwiches.
    pub total_sandwiches: MetricRow<i64>,
    /// Count of locations that collected.
    pub locations_participating: MetricRow<i64>,
    /// Average sandwiches per active location.
    pub avg_per_location: MetricRow<f64>,
    /// Group-collection sandwiches.
    pub group_collections: MetricRow<i64>,
}

/// Narrative trends plus the month-over-month chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsInsights {
    /// Recurring patterns the coordinators watch.
    pub patterns: Vec<String>,
    /// Seasonal effects expected to move the numbers.
    pub seasonal_impacts: Vec<String>,
    /// Upcoming or recent one-off events.
    pub special_events: Vec<String>,
    /// Monthly totals for the trend chart, oldest first.
    pub month_over_month: Vec<MonthTotal>,
}

/// One month's total for the trend chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthTotal {
    /// Month label, e.g. `"Jun 2025"`.
    pub month: String,
    /// Sandwiches collected that month.
    pub total: i64,
}

/// Preparation status for the coming collection week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextWeekPrep {
    /// How many hosts have confirmed for next week.
    pub host_confirmations: HostConfirmations,
    /// Actions still open before collection day.
    pub pending_actions: Vec<String>,
    /// Events that may affect the coming week.
    pub known_events: Vec<String>,
    /// Collection-day weather outlook.
    pub weather_forecast: String,
    /// Volunteer coverage summary.
    pub volunteer_status: String,
}

/// Host confirmation tally for next week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfirmations {
    /// Hosts confirmed so far.
    pub confirmed: usize,
    /// Hosts expected to confirm.
    pub total: usize,
    /// `confirmed / total`; `null` with no active hosts.
    pub percentage: Option<f64>,
}

/// Celebration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessCelebration {
    /// Milestones reached this week.
    pub milestones: Vec<String>,
    /// Featured volunteer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_spotlight: Option<VolunteerSpotlight>,
    /// Featured recipient quote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_story: Option<ImpactStory>,
}

/// A volunteer worth spotlighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerSpotlight {
    /// Volunteer name.
    pub name: String,
    /// What they did.
    pub contribution: String,
}

/// A recipient-side quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactStory {
    /// The quote.
    pub quote: String,
    /// Who said it.
    pub attribution: String,
}
