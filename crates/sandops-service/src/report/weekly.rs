//! Weekly impact report assembly.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use sandops_core::config::reporting::ReportingConfig;
use sandops_core::result::AppResult;
use sandops_database::repositories::collection::CollectionRepository;
use sandops_database::repositories::host::HostRepository;
use sandops_entity::collection::SandwichCollection;
use sandops_entity::host::Host;
use sandops_entity::report::location::LocationReport;
use sandops_entity::report::weekly::{
    CollectionWeek, MetricRow, MetricsTable, MonthTotal, MonthlyProgress, TrendsInsights,
    WeeklyReport, WeeklySummary,
};

use super::aggregate::{FourWeekAverages, WindowAggregate, aggregate_range, four_week_averages};
use super::classify::{
    classify_status, classify_trend, is_declining, ratio, relative_change, sort_for_display,
};
use super::narrative::{self, ReportContext};
use super::window::{WeekWindow, month_of, months_back};

/// Generates the weekly impact report.
#[derive(Debug, Clone)]
pub struct WeeklyReportService {
    /// Collection repository.
    collection_repo: Arc<CollectionRepository>,
    /// Host repository.
    host_repo: Arc<HostRepository>,
    /// Reporting thresholds and goals.
    config: ReportingConfig,
}

impl WeeklyReportService {
    /// Creates a new weekly report service.
    pub fn new(
        collection_repo: Arc<CollectionRepository>,
        host_repo: Arc<HostRepository>,
        config: ReportingConfig,
    ) -> Self {
        Self {
            collection_repo,
            host_repo,
            config,
        }
    }

    /// Generate the weekly report for the given week-ending date, or for the
    /// latest completed collection week when none is supplied.
    pub async fn generate(&self, week_ending: Option<NaiveDate>) -> AppResult<WeeklyReport> {
        let collections = self.collection_repo.find_all().await?;
        let hosts = self.host_repo.find_all().await?;
        let today = Utc::now().date_naive();

        let report = build_weekly_report(&collections, &hosts, week_ending, today, &self.config);
        debug!(
            week_start = %report.collection_week.start,
            week_end = %report.collection_week.end,
            total = report.summary.total_sandwiches,
            "Assembled weekly report"
        );
        Ok(report)
    }
}

/// Assemble the weekly report from raw records.
///
/// Pure: the same inputs produce the same report, so repeated requests with
/// unchanged data differ only in `report_date`.
pub fn build_weekly_report(
    collections: &[SandwichCollection],
    hosts: &[Host],
    week_ending: Option<NaiveDate>,
    today: NaiveDate,
    config: &ReportingConfig,
) -> WeeklyReport {
    let window = week_ending
        .map(WeekWindow::ending)
        .unwrap_or_else(|| WeekWindow::latest_collection_week(today));
    let total_locations = hosts.iter().filter(|h| h.is_active()).count();

    let current = aggregate_range(collections, window.range(), total_locations);
    let prior = aggregate_range(collections, window.prior_week().range(), total_locations);
    let four_weeks: Vec<WindowAggregate> = window
        .prior_weeks(4)
        .iter()
        .map(|w| aggregate_range(collections, w.range(), total_locations))
        .collect();
    let four = four_week_averages(&four_weeks);
    let month = aggregate_range(collections, month_of(window.end), total_locations);

    let locations = analyze_locations(collections, &window, &current, &prior, config);

    let ctx = ReportContext {
        week_total: current.total,
        group_total: current.group_total,
        active_locations: current.active_locations,
        total_locations,
        month_current: month.total,
        monthly_goal: config.monthly_goal,
        weekly_milestone: config.weekly_milestone,
    };

    WeeklyReport {
        report_date: today,
        collection_week: CollectionWeek {
            start: window.start,
            end: window.end,
        },
        summary: WeeklySummary {
            total_sandwiches: current.total,
            active_locations: current.active_locations,
            total_locations,
            participation_rate: ratio(current.active_locations, total_locations),
            week_over_week_change: relative_change(current.total, prior.total),
            monthly_progress: MonthlyProgress {
                current: month.total,
                goal: config.monthly_goal,
                percentage: if config.monthly_goal > 0 {
                    month.total as f64 / config.monthly_goal as f64
                } else {
                    0.0
                },
            },
        },
        metrics_table: build_metrics_table(&current, &prior, four),
        locations,
        trends_insights: TrendsInsights {
            patterns: narrative::patterns(),
            seasonal_impacts: narrative::seasonal_impacts(),
            special_events: narrative::special_events(),
            month_over_month: month_over_month(collections, window.end, config.chart_months),
        },
        next_week_prep: narrative::next_week_prep(total_locations, config),
        success_celebration: narrative::success_celebration(&ctx),
    }
}

/// Build the four-metric comparison grid.
pub fn build_metrics_table(
    current: &WindowAggregate,
    prior: &WindowAggregate,
    four: FourWeekAverages,
) -> MetricsTable {
    let avg_this = current.avg_per_location();
    let avg_last = prior.avg_per_location();

    MetricsTable {
        total_sandwiches: MetricRow {
            this_week: current.total,
            last_week: prior.total,
            change: current.total - prior.total,
            four_week_avg: four.total,
        },
        locations_participating: MetricRow {
            this_week: current.active_locations as i64,
            last_week: prior.active_locations as i64,
            change: current.active_locations as i64 - prior.active_locations as i64,
            four_week_avg: four.active_locations,
        },
        avg_per_location: MetricRow {
            this_week: avg_this,
            last_week: avg_last,
            change: avg_this - avg_last,
            four_week_avg: four.per_location,
        },
        group_collections: MetricRow {
            this_week: current.group_total,
            last_week: prior.group_total,
            change: current.group_total - prior.group_total,
            four_week_avg: four.group_total,
        },
    }
}

/// Classify every location seen this week or last week.
pub fn analyze_locations(
    collections: &[SandwichCollection],
    window: &WeekWindow,
    current: &WindowAggregate,
    prior: &WindowAggregate,
    config: &ReportingConfig,
) -> Vec<LocationReport> {
    // Weekly totals per window, oldest first, for the decline detector.
    let history: Vec<WindowAggregate> = (0..=config.decline_weeks as u32)
        .rev()
        .map(|i| {
            aggregate_range(
                collections,
                window.shifted_back(i).range(),
                current.total_locations,
            )
        })
        .collect();

    let names: BTreeSet<String> = current
        .locations
        .keys()
        .chain(prior.locations.keys())
        .cloned()
        .collect();

    let mut locations = Vec::with_capacity(names.len());
    for name in names {
        let totals = current.locations.get(name.as_str()).copied().unwrap_or_default();
        let prior_total = prior.location_total(name.as_str());
        let series: Vec<i64> = history
            .iter()
            .map(|agg| agg.location_total(name.as_str()))
            .collect();

        let mut issues = Vec::new();
        if totals.total == 0 {
            issues.push("No collections this week".to_string());
        }
        if is_declining(&series, config.decline_weeks) {
            issues.push(format!("Declining for {}+ weeks", config.decline_weeks));
        }

        locations.push(LocationReport {
            name,
            individual: totals.individual,
            group: totals.group,
            total: totals.total,
            trend: classify_trend(totals.total, prior_total, config.trend_noise_ratio),
            status: classify_status(totals.total, config.high_performer_threshold),
            issues: if issues.is_empty() { None } else { Some(issues) },
        });
    }

    sort_for_display(&mut locations);
    locations
}

/// Monthly totals for the trend chart, oldest month first.
pub fn month_over_month(
    collections: &[SandwichCollection],
    anchor: NaiveDate,
    months: u32,
) -> Vec<MonthTotal> {
    (0..months)
        .rev()
        .map(|i| {
            let first = months_back(anchor, i);
            let agg = aggregate_range(collections, month_of(first), 0);
            MonthTotal {
                month: first.format("%b %Y").to_string(),
                total: agg.total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use sandops_entity::host::HostStatus;
    use sandops_entity::report::location::LocationStatus;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(date: NaiveDate, host: &str, individual: i32, group1: i32) -> SandwichCollection {
        SandwichCollection {
            id: 0,
            collection_date: date,
            host_name: host.to_string(),
            individual_sandwiches: individual,
            group1_count: group1,
            group2_count: 0,
            submitted_at: DateTime::UNIX_EPOCH,
        }
    }

    fn host(name: &str, status: HostStatus) -> Host {
        Host {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: None,
            status,
            notes: None,
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    fn directory() -> Vec<Host> {
        vec![
            host("Alpharetta", HostStatus::Active),
            host("Dunwoody", HostStatus::Active),
            host("Roswell", HostStatus::Active),
            host("Decatur", HostStatus::Active),
            host("Sandy Springs", HostStatus::Active),
            host("Old Mill", HostStatus::Inactive),
        ]
    }

    /// The reference scenario: A collects 900, B logs a zero, C collects 400;
    /// five active hosts in the directory.
    fn scenario_records(week_end: NaiveDate) -> Vec<SandwichCollection> {
        vec![
            record(week_end, "Alpharetta", 900, 0),
            record(week_end, "Dunwoody", 0, 0),
            record(week_end, "Roswell", 300, 100),
        ]
    }

    #[test]
    fn test_reference_scenario_summary() {
        let week_end = d(2025, 6, 5);
        let report = build_weekly_report(
            &scenario_records(week_end),
            &directory(),
            Some(week_end),
            d(2025, 6, 6),
            &ReportingConfig::default(),
        );

        assert_eq!(report.summary.total_sandwiches, 1300);
        assert_eq!(report.summary.active_locations, 2);
        assert_eq!(report.summary.total_locations, 5);
        assert_eq!(report.summary.participation_rate, Some(0.4));
        // No prior-week data: the change is null, not zero.
        assert_eq!(report.summary.week_over_week_change, None);
        assert_eq!(report.collection_week.start, d(2025, 5, 30));
        assert_eq!(report.collection_week.end, week_end);
    }

    #[test]
    fn test_reference_scenario_statuses() {
        let week_end = d(2025, 6, 5);
        let report = build_weekly_report(
            &scenario_records(week_end),
            &directory(),
            Some(week_end),
            d(2025, 6, 6),
            &ReportingConfig::default(),
        );

        let by_name = |name: &str| {
            report
                .locations
                .iter()
                .find(|l| l.name == name)
                .unwrap()
                .status
        };
        assert_eq!(by_name("Alpharetta"), LocationStatus::HighPerformer);
        assert_eq!(by_name("Dunwoody"), LocationStatus::NeedsAttention);
        assert_eq!(by_name("Roswell"), LocationStatus::SteadyContributor);
        // Display order: high performer, steady, needs attention.
        assert_eq!(report.locations[0].name, "Alpharetta");
        assert_eq!(report.locations[2].name, "Dunwoody");
        assert_eq!(
            report.locations[2].issues,
            Some(vec!["No collections this week".to_string()])
        );
    }

    #[test]
    fn test_metrics_table_matches_locations() {
        let week_end = d(2025, 6, 5);
        let report = build_weekly_report(
            &scenario_records(week_end),
            &directory(),
            Some(week_end),
            d(2025, 6, 6),
            &ReportingConfig::default(),
        );
        let location_sum: i64 = report.locations.iter().map(|l| l.total).sum();
        assert_eq!(report.metrics_table.total_sandwiches.this_week, location_sum);
        assert_eq!(report.metrics_table.group_collections.this_week, 100);
        assert_eq!(report.metrics_table.avg_per_location.this_week, 650.0);
    }

    #[test]
    fn test_week_over_week_change() {
        let week_end = d(2025, 6, 5);
        let mut records = vec![record(week_end, "Alpharetta", 1100, 0)];
        records.push(record(week_end - chrono::Duration::days(7), "Alpharetta", 1000, 0));

        let report = build_weekly_report(
            &records,
            &directory(),
            Some(week_end),
            d(2025, 6, 6),
            &ReportingConfig::default(),
        );
        let change = report.summary.week_over_week_change.unwrap();
        assert!((change - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_progress_percentage() {
        let week_end = d(2025, 6, 5);
        let records = vec![record(d(2025, 6, 1), "Alpharetta", 12_500, 0)];
        let report = build_weekly_report(
            &records,
            &directory(),
            Some(week_end),
            d(2025, 6, 6),
            &ReportingConfig::default(),
        );
        assert_eq!(report.summary.monthly_progress.current, 12_500);
        assert_eq!(report.summary.monthly_progress.goal, 25_000);
        assert!((report.summary.monthly_progress.percentage - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_avg_per_location_change_is_set() {
        let week_end = d(2025, 6, 5);
        let records = vec![
            record(week_end, "Alpharetta", 600, 0),
            record(week_end - chrono::Duration::days(7), "Alpharetta", 400, 0),
            record(week_end - chrono::Duration::days(7), "Roswell", 200, 0),
        ];
        let report = build_weekly_report(
            &records,
            &directory(),
            Some(week_end),
            d(2025, 6, 6),
            &ReportingConfig::default(),
        );
        let row = &report.metrics_table.avg_per_location;
        assert_eq!(row.this_week, 600.0);
        assert_eq!(row.last_week, 300.0);
        assert_eq!(row.change, 300.0);
    }

    #[test]
    fn test_declining_location_is_flagged() {
        let week_end = d(2025, 6, 26);
        let mut records = Vec::new();
        // 500, 400, 300, 200 across four consecutive weeks.
        for (weeks_back, count) in [(3, 500), (2, 400), (1, 300), (0, 200)] {
            records.push(record(
                week_end - chrono::Duration::days(7 * weeks_back),
                "Alpharetta",
                count,
                0,
            ));
        }
        let report = build_weekly_report(
            &records,
            &directory(),
            Some(week_end),
            d(2025, 6, 27),
            &ReportingConfig::default(),
        );
        let alpharetta = report
            .locations
            .iter()
            .find(|l| l.name == "Alpharetta")
            .unwrap();
        assert_eq!(
            alpharetta.issues,
            Some(vec!["Declining for 3+ weeks".to_string()])
        );
    }

    #[test]
    fn test_idempotent_given_same_inputs() {
        let week_end = d(2025, 6, 5);
        let records = scenario_records(week_end);
        let hosts = directory();
        let config = ReportingConfig::default();

        let a = build_weekly_report(&records, &hosts, Some(week_end), d(2025, 6, 6), &config);
        let b = build_weekly_report(&records, &hosts, Some(week_end), d(2025, 6, 6), &config);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_snapped_window_when_no_date_supplied() {
        // 2025-06-09 is a Monday; the latest completed Thursday is 06-05.
        let report = build_weekly_report(
            &[],
            &directory(),
            None,
            d(2025, 6, 9),
            &ReportingConfig::default(),
        );
        assert_eq!(report.collection_week.end, d(2025, 6, 5));
        assert_eq!(report.summary.total_sandwiches, 0);
        assert_eq!(report.summary.week_over_week_change, None);
    }
}
