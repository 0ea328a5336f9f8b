//! Narrative report sections driven by rule tables.
//!
//! Each section is a table of `{predicate, render}` rules evaluated against
//! the aggregate numbers, so the text layer stays data-driven and testable.

use sandops_core::config::reporting::ReportingConfig;
use sandops_entity::report::weekly::{
    HostConfirmations, ImpactStory, NextWeekPrep, SuccessCelebration, VolunteerSpotlight,
};

use super::classify::ratio;
use super::fmt::format_count;

/// Aggregate numbers the narrative rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext {
    /// Total sandwiches this week.
    pub week_total: i64,
    /// Group-collection sandwiches this week.
    pub group_total: i64,
    /// Locations that collected this week.
    pub active_locations: usize,
    /// Active hosts in the directory.
    pub total_locations: usize,
    /// Month-to-date total.
    pub month_current: i64,
    /// Configured monthly goal.
    pub monthly_goal: i64,
    /// Configured weekly milestone threshold.
    pub weekly_milestone: i64,
}

/// One narrative rule: when `applies` holds, `render` produces a line.
struct Rule {
    applies: fn(&ReportContext) -> bool,
    render: fn(&ReportContext) -> String,
}

const MILESTONE_RULES: &[Rule] = &[
    Rule {
        applies: |ctx| ctx.week_total > ctx.weekly_milestone,
        render: |ctx| {
            format!(
                "Exceeded {} sandwiches in a single week!",
                format_count(ctx.weekly_milestone)
            )
        },
    },
    Rule {
        applies: |ctx| ctx.total_locations > 0 && ctx.active_locations == ctx.total_locations,
        render: |_| "100% location participation achieved!".to_string(),
    },
    Rule {
        applies: |ctx| ctx.active_locations >= 15,
        render: |_| "Achieved 15+ active collection locations".to_string(),
    },
    Rule {
        applies: |ctx| ctx.monthly_goal > 0 && ctx.month_current >= ctx.monthly_goal,
        render: |ctx| {
            format!(
                "Monthly goal of {} sandwiches already reached",
                format_count(ctx.monthly_goal)
            )
        },
    },
];

const PATTERNS: &[&str] = &[
    "Thursday collections consistently strongest",
    "Higher collections typically occur in the first half of the month",
    "New location onboarding shows positive impact within two weeks",
];

const SEASONAL_IMPACTS: &[&str] = &[
    "Back-to-school season typically increases group participation",
    "Holiday periods may see reduced individual collections",
    "Summer months show a consistent 10-15% increase",
];

const SPECIAL_EVENTS: &[&str] = &[
    "Community drive scheduled for next month",
    "Volunteer appreciation event planning underway",
];

const PENDING_ACTIONS: &[&str] = &[
    "Follow up with unconfirmed hosts",
    "Prepare collection bags and labels",
    "Update volunteer schedules",
    "Confirm delivery logistics with recipient organizations",
];

const KNOWN_EVENTS: &[&str] = &[
    "School board meeting - may affect timing",
    "Community festival - potential boost in participation",
];

const WEATHER_FORECAST: &str = "Partly cloudy, 72F - good collection conditions";
const VOLUNTEER_STATUS: &str = "All routes covered, 2 backup volunteers available";

/// Milestones reached this week, per the milestone rule table.
pub fn milestones(ctx: &ReportContext) -> Vec<String> {
    MILESTONE_RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.render)(ctx))
        .collect()
}

/// Recurring patterns for the trends section.
pub fn patterns() -> Vec<String> {
    PATTERNS.iter().map(|s| s.to_string()).collect()
}

/// Seasonal effects for the trends section.
pub fn seasonal_impacts() -> Vec<String> {
    SEASONAL_IMPACTS.iter().map(|s| s.to_string()).collect()
}

/// Upcoming one-off events for the trends section.
pub fn special_events() -> Vec<String> {
    SPECIAL_EVENTS.iter().map(|s| s.to_string()).collect()
}

/// Next-week preparation checklist.
///
/// Host confirmations are derived from the configured confirmation rate over
/// active hosts; real confirmation tracking has no data source yet.
pub fn next_week_prep(active_hosts: usize, config: &ReportingConfig) -> NextWeekPrep {
    let confirmed = (active_hosts as f64 * config.host_confirmation_rate).floor() as usize;
    NextWeekPrep {
        host_confirmations: HostConfirmations {
            confirmed,
            total: active_hosts,
            percentage: ratio(confirmed, active_hosts),
        },
        pending_actions: PENDING_ACTIONS.iter().map(|s| s.to_string()).collect(),
        known_events: KNOWN_EVENTS.iter().map(|s| s.to_string()).collect(),
        weather_forecast: WEATHER_FORECAST.to_string(),
        volunteer_status: VOLUNTEER_STATUS.to_string(),
    }
}

/// Celebration section: milestone rules plus the featured spotlight/story.
pub fn success_celebration(ctx: &ReportContext) -> SuccessCelebration {
    SuccessCelebration {
        milestones: milestones(ctx),
        volunteer_spotlight: Some(VolunteerSpotlight {
            name: "Sarah M. - Alpharetta Team".to_string(),
            contribution: "Organized 3 new group collections this month, adding 450+ sandwiches"
                .to_string(),
        }),
        impact_story: Some(ImpactStory {
            quote: "The sandwiches you provide help us serve 200+ families each week. \
                    Your consistency means everything to our community."
                .to_string(),
            attribution: "Director, Local Food Pantry".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(week_total: i64, active: usize, total: usize) -> ReportContext {
        ReportContext {
            week_total,
            group_total: 0,
            active_locations: active,
            total_locations: total,
            month_current: 0,
            monthly_goal: 25_000,
            weekly_milestone: 8_000,
        }
    }

    #[test]
    fn test_weekly_milestone_gating() {
        assert!(milestones(&ctx(8_001, 3, 10))
            .iter()
            .any(|m| m.contains("8,000")));
        assert!(milestones(&ctx(8_000, 3, 10)).is_empty());
    }

    #[test]
    fn test_full_participation_milestone() {
        let lines = milestones(&ctx(100, 10, 10));
        assert!(lines.iter().any(|m| m.contains("100%")));
        // An empty directory is not full participation.
        assert!(milestones(&ctx(100, 0, 0)).is_empty());
    }

    #[test]
    fn test_monthly_goal_milestone() {
        let mut context = ctx(100, 1, 10);
        context.month_current = 25_000;
        assert!(milestones(&context).iter().any(|m| m.contains("25,000")));
    }

    #[test]
    fn test_host_confirmations_from_rate() {
        let config = ReportingConfig::default();
        let prep = next_week_prep(20, &config);
        assert_eq!(prep.host_confirmations.confirmed, 15);
        assert_eq!(prep.host_confirmations.total, 20);
        assert_eq!(prep.host_confirmations.percentage, Some(0.75));
    }

    #[test]
    fn test_host_confirmations_without_hosts() {
        let config = ReportingConfig::default();
        let prep = next_week_prep(0, &config);
        assert_eq!(prep.host_confirmations.percentage, None);
    }
}
