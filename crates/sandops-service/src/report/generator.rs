//! Community report generation over an arbitrary date range.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use sandops_core::config::reporting::ReportingConfig;
use sandops_core::error::AppError;
use sandops_core::result::AppResult;
use sandops_database::repositories::collection::CollectionRepository;
use sandops_database::repositories::host::HostRepository;
use sandops_database::repositories::project::ProjectRepository;
use sandops_entity::collection::SandwichCollection;
use sandops_entity::host::Host;
use sandops_entity::project::{Project, ProjectStatus};
use sandops_entity::report::summary::{
    BuddyCandidate, CapacityGrowth, CelebrationStories, Chart, ChartPoint, ChartType,
    CollectiveAchievements, CommunityConnection, CommunityImpact, CommunityReport,
    ConsistencyStatus, CoverageEntry, ExpansionOpportunity, MilestoneAchievement, MilestoneMoment,
    OperationalHealth, RecipientFeedback, ReportMetadata, ResourceNeed, SpecialEvent, Spotlight,
    SupportOpportunities, VolunteerNeed,
};

use super::aggregate::{WindowAggregate, aggregate_range};
use super::fmt::format_count;
use super::rows::{CollectionRow, HealthRow, OrganizationRow, ReportRows, SupportRow};
use super::window::DateRange;

/// Estimated volunteers behind each host location.
const VOLUNTEERS_PER_HOST: i64 = 3;
/// Range total below which a host is listed under resource needs.
const RESOURCE_NEED_THRESHOLD: i64 = 200;
/// Estimated month-over-month capacity growth percentage.
const ESTIMATED_GROWTH_PCT: f64 = 15.0;
/// Cumulative milestones recognized in the community-impact section.
const CUMULATIVE_MILESTONES: &[(i64, &str, &str)] = &[
    (
        2_000_000,
        "2 Million Sandwiches",
        "Reached the incredible milestone of 2 million sandwiches provided to neighbors in need!",
    ),
    (
        1_500_000,
        "1.5 Million Sandwiches",
        "Continued growing our community impact with 1.5 million sandwiches served.",
    ),
];

/// Report request configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Which report view to build.
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Inclusive date range to report over.
    pub date_range: ReportDateRange,
    /// Requested output format.
    pub format: ReportFormat,
    /// Whether to attach chart series.
    #[serde(default)]
    pub include_charts: bool,
}

impl ReportConfig {
    /// Validate the request before generation.
    pub fn validate(&self) -> AppResult<()> {
        if self.date_range.start > self.date_range.end {
            return Err(AppError::validation(format!(
                "date_range.start ({}) is after date_range.end ({})",
                self.date_range.start, self.date_range.end
            )));
        }
        Ok(())
    }

    fn range(&self) -> DateRange {
        DateRange {
            start: self.date_range.start,
            end: self.date_range.end,
        }
    }
}

/// Inclusive report date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportDateRange {
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
}

/// The available report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    /// Totals and reach.
    CommunityImpact,
    /// Per-organization contributions.
    CollectiveAchievements,
    /// Coverage consistency.
    OperationalHealth,
    /// Volunteer and expansion opportunities.
    SupportOpportunities,
    /// Everything, with raw collection rows.
    Comprehensive,
}

impl ReportType {
    /// Kebab-case identifier used in filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommunityImpact => "community-impact",
            Self::CollectiveAchievements => "collective-achievements",
            Self::OperationalHealth => "operational-health",
            Self::SupportOpportunities => "support-opportunities",
            Self::Comprehensive => "comprehensive",
        }
    }

    /// Report title for the metadata block.
    pub fn title(&self) -> &'static str {
        match self {
            Self::CommunityImpact => "Community Impact Overview",
            Self::CollectiveAchievements => "Collective Achievements Report",
            Self::OperationalHealth => "Operational Health Assessment",
            Self::SupportOpportunities => "Support Opportunities Report",
            Self::Comprehensive => "Community Impact & Support Report",
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Structured JSON.
    Json,
    /// CSV of the detail rows.
    Csv,
    /// Paginated PDF (weekly report only).
    Pdf,
}

impl ReportFormat {
    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

/// Generates typed community reports.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    /// Collection repository.
    collection_repo: Arc<CollectionRepository>,
    /// Host repository.
    host_repo: Arc<HostRepository>,
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
    /// Reporting thresholds and goals.
    config: ReportingConfig,
}

impl ReportGenerator {
    /// Creates a new report generator.
    pub fn new(
        collection_repo: Arc<CollectionRepository>,
        host_repo: Arc<HostRepository>,
        project_repo: Arc<ProjectRepository>,
        config: ReportingConfig,
    ) -> Self {
        Self {
            collection_repo,
            host_repo,
            project_repo,
            config,
        }
    }

    /// Generate the full report structure.
    pub async fn generate(&self, request: &ReportConfig) -> AppResult<CommunityReport> {
        request.validate()?;
        let (collections, hosts, projects) = tokio::try_join!(
            self.collection_repo.find_all(),
            self.host_repo.find_all(),
            self.project_repo.find_all(),
        )?;
        build_community_report(
            &collections,
            &hosts,
            &projects,
            request,
            Utc::now(),
            &self.config,
        )
    }

    /// Render only the detail rows as CSV.
    pub async fn generate_csv(&self, request: &ReportConfig) -> AppResult<Vec<u8>> {
        request.validate()?;
        let (collections, hosts) = tokio::try_join!(
            self.collection_repo.find_all(),
            self.host_repo.find_all(),
        )?;
        let aggregate = aggregate_range(&collections, request.range(), hosts.len());
        build_rows(
            request.report_type,
            &collections,
            &hosts,
            request.range(),
            &aggregate,
            &self.config,
        )
        .to_csv()
    }
}

/// Assemble the community report from raw records.
pub fn build_community_report(
    collections: &[SandwichCollection],
    hosts: &[Host],
    projects: &[Project],
    request: &ReportConfig,
    now: DateTime<Utc>,
    config: &ReportingConfig,
) -> AppResult<CommunityReport> {
    let range = request.range();
    let aggregate = aggregate_range(collections, range, hosts.len());

    let rows = build_rows(
        request.report_type,
        collections,
        hosts,
        range,
        &aggregate,
        config,
    );
    let charts = request
        .include_charts
        .then(|| build_charts(collections, hosts, range, &aggregate, config));

    Ok(CommunityReport {
        metadata: ReportMetadata {
            title: request.report_type.title().to_string(),
            generated_at: now,
            date_range: format!(
                "{} - {}",
                range.start.format("%b %d, %Y"),
                range.end.format("%b %d, %Y")
            ),
            total_records: rows.len(),
            format: request.format.as_str().to_string(),
        },
        community_impact: community_impact(&aggregate, hosts, now),
        collective_achievements: collective_achievements(collections, hosts, projects, range),
        operational_health: operational_health(hosts, &aggregate),
        support_opportunities: support_opportunities(hosts, &aggregate, config),
        celebration_stories: celebration_stories(hosts, &aggregate, now),
        data: rows.to_json()?,
        charts,
    })
}

/// Detail rows for the requested report type.
pub fn build_rows(
    report_type: ReportType,
    collections: &[SandwichCollection],
    hosts: &[Host],
    range: DateRange,
    aggregate: &WindowAggregate,
    config: &ReportingConfig,
) -> ReportRows {
    match report_type {
        ReportType::CommunityImpact | ReportType::Comprehensive => ReportRows::Collections(
            collections
                .iter()
                .filter(|c| range.contains(c.collection_date))
                .map(|c| CollectionRow {
                    id: c.id,
                    date: c.collection_date,
                    host_name: c.host_name.clone(),
                    individual_sandwiches: i64::from(c.individual_sandwiches),
                    group_collections: c.group_total(),
                    total: c.total(),
                })
                .collect(),
        ),
        ReportType::CollectiveAchievements => ReportRows::Organizations(
            hosts
                .iter()
                .map(|h| OrganizationRow {
                    organization: h.name.clone(),
                    status: h.status.to_string(),
                    total_contributions: aggregate.location_total(&h.name),
                    join_date: h.created_at.date_naive(),
                })
                .collect(),
        ),
        ReportType::OperationalHealth => ReportRows::Health(
            hosts
                .iter()
                .map(|h| {
                    let total = aggregate.location_total(&h.name);
                    let last_activity = collections
                        .iter()
                        .filter(|c| c.host_name == h.name && range.contains(c.collection_date))
                        .map(|c| c.collection_date)
                        .max();
                    HealthRow {
                        location: h.name.clone(),
                        total_contributions: total,
                        consistency: if total > 300 {
                            "High".to_string()
                        } else if total > 100 {
                            "Medium".to_string()
                        } else {
                            "Needs Support".to_string()
                        },
                        last_activity,
                        support_needed: total < config.support_threshold,
                    }
                })
                .collect(),
        ),
        ReportType::SupportOpportunities => ReportRows::Support(
            hosts
                .iter()
                .map(|h| {
                    let total = aggregate.location_total(&h.name);
                    let (opportunity_type, recommended_action) =
                        if total < config.support_threshold {
                            ("Needs Volunteers", "Recruit 1-2 volunteers")
                        } else if total > config.expansion_threshold {
                            ("Ready for Expansion", "Consider expansion")
                        } else {
                            ("Stable Operations", "Continue current operations")
                        };
                    SupportRow {
                        location: h.name.clone(),
                        opportunity_type: opportunity_type.to_string(),
                        current_volunteers: estimated_volunteers(total),
                        recommended_action: recommended_action.to_string(),
                    }
                })
                .collect(),
        ),
    }
}

fn community_impact(
    aggregate: &WindowAggregate,
    hosts: &[Host],
    now: DateTime<Utc>,
) -> CommunityImpact {
    let recipient_organizations_served = aggregate
        .locations
        .keys()
        .filter(|name| !name.to_lowercase().contains("group"))
        .count();

    let geographic_areas_reached: Vec<String> = hosts
        .iter()
        .map(|h| area_of(&h.name).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(10)
        .collect();

    let milestone_achievements = CUMULATIVE_MILESTONES
        .iter()
        .filter(|(threshold, _, _)| aggregate.total >= *threshold)
        .map(|(_, milestone, description)| MilestoneAchievement {
            milestone: milestone.to_string(),
            achieved_date: now.date_naive(),
            description: description.to_string(),
        })
        .collect();

    CommunityImpact {
        total_sandwiches_provided: aggregate.total,
        recipient_organizations_served,
        geographic_areas_reached,
        milestone_achievements,
    }
}

fn collective_achievements(
    collections: &[SandwichCollection],
    hosts: &[Host],
    projects: &[Project],
    range: DateRange,
) -> CollectiveAchievements {
    let new_areas_activated: Vec<String> = hosts
        .iter()
        .filter(|h| range.contains(h.created_at.date_naive()))
        .map(|h| h.name.clone())
        .take(10)
        .collect();

    // Trailing month of the range approximates current capacity.
    let trailing_start = range
        .end
        .checked_sub_months(Months::new(1))
        .unwrap_or(range.start);
    let trailing = aggregate_range(
        collections,
        DateRange {
            start: trailing_start,
            end: range.end,
        },
        hosts.len(),
    );

    let active_projects = projects.iter().filter(|p| p.status != ProjectStatus::Completed);

    CollectiveAchievements {
        total_volunteer_participation: hosts.len() as i64 * VOLUNTEERS_PER_HOST,
        new_areas_activated,
        special_event_successes: active_projects
            .take(2)
            .map(|p| SpecialEvent {
                event: p.title.clone(),
                date: p.created_at.date_naive().format("%b %Y").to_string(),
                impact: format!("Coordinated by {}", p.assigned_to.as_deref().unwrap_or("volunteers")),
            })
            .collect(),
        capacity_growth: CapacityGrowth {
            current_capacity: trailing.total,
            growth_percentage: ESTIMATED_GROWTH_PCT,
        },
    }
}

fn operational_health(hosts: &[Host], aggregate: &WindowAggregate) -> OperationalHealth {
    let coverage_consistency: Vec<CoverageEntry> = hosts
        .iter()
        .take(20)
        .map(|h| {
            let total = aggregate.location_total(&h.name);
            let (consistency_score, status) = if total > 500 {
                (95, ConsistencyStatus::Excellent)
            } else if total < 100 {
                (60, ConsistencyStatus::NeedsAttention)
            } else {
                (85, ConsistencyStatus::Good)
            };
            CoverageEntry {
                area: h.name.clone(),
                consistency_score,
                status,
            }
        })
        .collect();

    let resource_needs: Vec<ResourceNeed> = hosts
        .iter()
        .filter(|h| aggregate.location_total(&h.name) < RESOURCE_NEED_THRESHOLD)
        .take(10)
        .map(|h| ResourceNeed {
            area: h.name.clone(),
            need_type: "volunteers".to_string(),
            priority: "medium".to_string(),
            description: "Could benefit from additional volunteer support to increase \
                          sandwich production"
                .to_string(),
        })
        .collect();

    OperationalHealth {
        coverage_consistency,
        resource_needs,
    }
}

fn support_opportunities(
    hosts: &[Host],
    aggregate: &WindowAggregate,
    config: &ReportingConfig,
) -> SupportOpportunities {
    let areas_needing_volunteers: Vec<VolunteerNeed> = hosts
        .iter()
        .filter(|h| aggregate.location_total(&h.name) < config.support_threshold)
        .take(10)
        .map(|h| {
            let total = aggregate.location_total(&h.name);
            VolunteerNeed {
                area: h.name.clone(),
                current_volunteers: estimated_volunteers(total),
                volunteers_needed: 2,
                description: "This location would benefit from 1-2 additional regular volunteers"
                    .to_string(),
            }
        })
        .collect();

    let buddy_system_candidates: Vec<BuddyCandidate> = hosts
        .iter()
        .filter(|h| aggregate.location_total(&h.name) < config.support_threshold)
        .take(8)
        .map(|h| BuddyCandidate {
            host_name: h.name.clone(),
            reason: "Could benefit from an experienced volunteer mentor".to_string(),
            potential_mentor: "Experienced host coordinator".to_string(),
        })
        .collect();

    let expansion_opportunities: Vec<ExpansionOpportunity> = hosts
        .iter()
        .filter(|h| aggregate.location_total(&h.name) > config.expansion_threshold)
        .take(5)
        .map(|h| ExpansionOpportunity {
            neighborhood: format!("{} Area", h.name),
            readiness_score: 85,
            next_steps: vec![
                "Identify nearby locations for expansion".to_string(),
                "Recruit additional volunteer coordinators".to_string(),
                "Establish supply chain for increased volume".to_string(),
            ],
        })
        .collect();

    SupportOpportunities {
        areas_needing_volunteers,
        buddy_system_candidates,
        expansion_opportunities,
    }
}

fn celebration_stories(
    hosts: &[Host],
    aggregate: &WindowAggregate,
    now: DateTime<Utc>,
) -> CelebrationStories {
    let mut by_total: Vec<(&Host, i64)> = hosts
        .iter()
        .map(|h| (h, aggregate.location_total(&h.name)))
        .collect();
    by_total.sort_by(|a, b| b.1.cmp(&a.1));

    let volunteer_spotlights: Vec<Spotlight> = by_total
        .iter()
        .take(5)
        .map(|(host, total)| Spotlight {
            name: host.name.clone(),
            contribution: format!("{} sandwiches contributed", format_count(*total)),
            story: format!(
                "{} has been a consistent and dedicated contributor to our community \
                 impact mission.",
                host.name
            ),
        })
        .collect();

    CelebrationStories {
        milestones_moments: vec![MilestoneMoment {
            title: "Community Impact Milestone".to_string(),
            date: now.date_naive(),
            description: "Our community has come together to provide sandwiches to neighbors \
                          in need"
                .to_string(),
            impact: format!(
                "{} sandwiches represent countless acts of kindness and community care",
                format_count(aggregate.total)
            ),
        }],
        volunteer_spotlights,
        recipient_feedback: vec![
            RecipientFeedback {
                organization: "Local Food Bank".to_string(),
                feedback: "The sandwich donations have been a tremendous help for families in \
                           our community"
                    .to_string(),
                date: now.date_naive() - Duration::days(7),
            },
            RecipientFeedback {
                organization: "Community Center".to_string(),
                feedback: "These sandwiches provide reliable nutrition for people experiencing \
                           food insecurity"
                    .to_string(),
                date: now.date_naive() - Duration::days(14),
            },
        ],
        community_connections: vec![
            CommunityConnection {
                connection: "Volunteer Training Network".to_string(),
                participants: vec![
                    "Experienced hosts".to_string(),
                    "New volunteers".to_string(),
                    "Coordinators".to_string(),
                ],
                outcome: "Improved coordination and knowledge sharing across locations"
                    .to_string(),
            },
            CommunityConnection {
                connection: "Supply Chain Collaboration".to_string(),
                participants: vec![
                    "Multiple host locations".to_string(),
                    "Local suppliers".to_string(),
                ],
                outcome: "More efficient resource distribution and cost savings".to_string(),
            },
        ],
    }
}

/// Chart series for the dashboard.
fn build_charts(
    collections: &[SandwichCollection],
    hosts: &[Host],
    range: DateRange,
    aggregate: &WindowAggregate,
    config: &ReportingConfig,
) -> Vec<Chart> {
    // Monthly growth line.
    let mut monthly: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for record in collections.iter().filter(|c| range.contains(c.collection_date)) {
        let month_start = record
            .collection_date
            .with_day(1)
            .expect("first day of month is always valid");
        *monthly.entry(month_start).or_insert(0) += record.total();
    }
    let growth = Chart {
        chart_type: ChartType::Line,
        title: "Community Impact Growth Over Time".to_string(),
        data: monthly
            .iter()
            .map(|(month, total)| ChartPoint {
                label: month.format("%b %Y").to_string(),
                value: *total,
            })
            .collect(),
    };

    // Geographic pie.
    let mut by_area: BTreeMap<String, i64> = BTreeMap::new();
    for host in hosts {
        *by_area.entry(area_of(&host.name).to_string()).or_insert(0) +=
            aggregate.location_total(&host.name);
    }
    let mut areas: Vec<(String, i64)> = by_area.into_iter().collect();
    areas.sort_by(|a, b| b.1.cmp(&a.1));
    let geographic = Chart {
        chart_type: ChartType::Pie,
        title: "Community Support by Geographic Area".to_string(),
        data: areas
            .into_iter()
            .take(8)
            .map(|(label, value)| ChartPoint { label, value })
            .collect(),
    };

    // Support distribution bar.
    let mut needs_support = 0i64;
    let mut stable = 0i64;
    let mut ready = 0i64;
    for host in hosts {
        let total = aggregate.location_total(&host.name);
        if total < config.support_threshold {
            needs_support += 1;
        } else if total > config.expansion_threshold {
            ready += 1;
        } else {
            stable += 1;
        }
    }
    let support = Chart {
        chart_type: ChartType::Bar,
        title: "Support Opportunities Distribution".to_string(),
        data: vec![
            ChartPoint {
                label: "Areas Needing Volunteers".to_string(),
                value: needs_support,
            },
            ChartPoint {
                label: "Stable Operations".to_string(),
                value: stable,
            },
            ChartPoint {
                label: "Ready for Expansion".to_string(),
                value: ready,
            },
        ],
    };

    vec![growth, geographic, support]
}

/// Rough volunteer estimate from range activity.
fn estimated_volunteers(total: i64) -> i64 {
    (total / 100).max(1)
}

/// Geographic area label derived from a host name.
fn area_of(host_name: &str) -> &str {
    host_name.split_whitespace().next().unwrap_or("Community")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sandops_entity::host::HostStatus;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(date: NaiveDate, host: &str, individual: i32) -> SandwichCollection {
        SandwichCollection {
            id: 1,
            collection_date: date,
            host_name: host.to_string(),
            individual_sandwiches: individual,
            group1_count: 0,
            group2_count: 0,
            submitted_at: DateTime::UNIX_EPOCH,
        }
    }

    fn host(name: &str) -> Host {
        Host {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: None,
            status: HostStatus::Active,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        }
    }

    fn request(report_type: ReportType, include_charts: bool) -> ReportConfig {
        ReportConfig {
            report_type,
            date_range: ReportDateRange {
                start: d(2025, 1, 1),
                end: d(2025, 6, 30),
            },
            format: ReportFormat::Json,
            include_charts,
        }
    }

    fn fixtures() -> (Vec<SandwichCollection>, Vec<Host>) {
        let collections = vec![
            record(d(2025, 3, 6), "Alpharetta Park", 500),
            record(d(2025, 3, 13), "Alpharetta Park", 450),
            record(d(2025, 4, 10), "Dunwoody Library", 120),
            record(d(2025, 5, 8), "Roswell Mill", 80),
        ];
        let hosts = vec![
            host("Alpharetta Park"),
            host("Dunwoody Library"),
            host("Roswell Mill"),
        ];
        (collections, hosts)
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut req = request(ReportType::Comprehensive, false);
        req.date_range.start = d(2025, 7, 1);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_comprehensive_report_totals() {
        let (collections, hosts) = fixtures();
        let report = build_community_report(
            &collections,
            &hosts,
            &[],
            &request(ReportType::Comprehensive, false),
            Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap(),
            &ReportingConfig::default(),
        )
        .unwrap();

        assert_eq!(report.community_impact.total_sandwiches_provided, 1150);
        assert_eq!(report.metadata.total_records, 4);
        assert_eq!(report.metadata.title, "Community Impact & Support Report");
        assert!(report.charts.is_none());
    }

    #[test]
    fn test_support_rows_classification() {
        let (collections, hosts) = fixtures();
        let config = ReportingConfig::default();
        let range = request(ReportType::SupportOpportunities, false).range();
        let aggregate = aggregate_range(&collections, range, hosts.len());

        let rows = build_rows(
            ReportType::SupportOpportunities,
            &collections,
            &hosts,
            range,
            &aggregate,
            &config,
        );
        let ReportRows::Support(rows) = rows else {
            panic!("expected support rows");
        };
        let by_location = |name: &str| rows.iter().find(|r| r.location == name).unwrap();
        // 950 > expansion threshold of 400.
        assert_eq!(
            by_location("Alpharetta Park").opportunity_type,
            "Ready for Expansion"
        );
        // 120 is below the support threshold of 150.
        assert_eq!(
            by_location("Dunwoody Library").opportunity_type,
            "Needs Volunteers"
        );
    }

    #[test]
    fn test_charts_present_when_requested() {
        let (collections, hosts) = fixtures();
        let report = build_community_report(
            &collections,
            &hosts,
            &[],
            &request(ReportType::CommunityImpact, true),
            Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap(),
            &ReportingConfig::default(),
        )
        .unwrap();

        let charts = report.charts.unwrap();
        assert_eq!(charts.len(), 3);
        assert_eq!(charts[0].chart_type, ChartType::Line);
        // March appears once with both Alpharetta collections summed.
        let march = charts[0]
            .data
            .iter()
            .find(|p| p.label == "Mar 2025")
            .unwrap();
        assert_eq!(march.value, 950);
    }

    #[test]
    fn test_report_type_serde_kebab_case() {
        let req: ReportConfig = serde_json::from_str(
            r#"{
                "type": "community-impact",
                "date_range": { "start": "2025-01-01", "end": "2025-03-31" },
                "format": "csv"
            }"#,
        )
        .unwrap();
        assert_eq!(req.report_type, ReportType::CommunityImpact);
        assert_eq!(req.format, ReportFormat::Csv);
        assert!(!req.include_charts);
    }
}
