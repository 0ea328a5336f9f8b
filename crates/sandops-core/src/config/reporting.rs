//! Reporting thresholds and goals.
//!
//! The reporting pipeline takes every business constant from this section so
//! that deployments (and tests) can vary them without code changes.

use serde::{Deserialize, Serialize};

/// Thresholds and goals for report generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Monthly sandwich goal used for monthly-progress tracking.
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: i64,
    /// Weekly total above which a location counts as a high performer.
    /// The boundary is exclusive: a week of exactly this total is steady.
    #[serde(default = "default_high_performer_threshold")]
    pub high_performer_threshold: i64,
    /// Relative change within this band is reported as a stable trend.
    #[serde(default = "default_trend_noise_ratio")]
    pub trend_noise_ratio: f64,
    /// Weekly total that triggers the milestone celebration entry.
    #[serde(default = "default_weekly_milestone")]
    pub weekly_milestone: i64,
    /// Number of consecutive declining weeks before a location is flagged.
    #[serde(default = "default_decline_weeks")]
    pub decline_weeks: usize,
    /// Months of history on the month-over-month chart.
    #[serde(default = "default_chart_months")]
    pub chart_months: u32,
    /// Assumed host confirmation rate for next-week preparation.
    ///
    /// Placeholder until real confirmation tracking lands; see DESIGN.md.
    #[serde(default = "default_confirmation_rate")]
    pub host_confirmation_rate: f64,
    /// Window total below which a location is offered volunteer support.
    #[serde(default = "default_support_threshold")]
    pub support_threshold: i64,
    /// Window total above which a location is considered expansion-ready.
    #[serde(default = "default_expansion_threshold")]
    pub expansion_threshold: i64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            monthly_goal: default_monthly_goal(),
            high_performer_threshold: default_high_performer_threshold(),
            trend_noise_ratio: default_trend_noise_ratio(),
            weekly_milestone: default_weekly_milestone(),
            decline_weeks: default_decline_weeks(),
            chart_months: default_chart_months(),
            host_confirmation_rate: default_confirmation_rate(),
            support_threshold: default_support_threshold(),
            expansion_threshold: default_expansion_threshold(),
        }
    }
}

fn default_monthly_goal() -> i64 {
    25_000
}

fn default_high_performer_threshold() -> i64 {
    800
}

fn default_trend_noise_ratio() -> f64 {
    0.10
}

fn default_weekly_milestone() -> i64 {
    8_000
}

fn default_decline_weeks() -> usize {
    3
}

fn default_chart_months() -> u32 {
    6
}

fn default_confirmation_rate() -> f64 {
    0.75
}

fn default_support_threshold() -> i64 {
    150
}

fn default_expansion_threshold() -> i64 {
    400
}
