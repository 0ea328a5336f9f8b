//! The typed community report produced by the report generator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A community-focused report over an arbitrary date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityReport {
    /// Report metadata.
    pub metadata: ReportMetadata,
    /// Totals and reach.
    pub community_impact: CommunityImpact,
    /// What the volunteer network achieved together.
    pub collective_achievements: CollectiveAchievements,
    /// Coverage consistency and resource needs.
    pub operational_health: OperationalHealth,
    /// Where support would help most.
    pub support_opportunities: SupportOpportunities,
    /// Stories and spotlights.
    pub celebration_stories: CelebrationStories,
    /// Detail rows; shape depends on the requested report type.
    pub data: serde_json::Value,
    /// Chart series, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<Vec<Chart>>,
}

/// Report header block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report title derived from the report type.
    pub title: String,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Human-readable date range, e.g. `"Jan 01, 2025 - Mar 31, 2025"`.
    pub date_range: String,
    /// Number of detail rows.
    pub total_records: usize,
    /// Requested output format.
    pub format: String,
}

/// Totals and reach for the date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityImpact {
    /// Total sandwiches across all collections in range.
    pub total_sandwiches_provided: i64,
    /// Distinct host organizations that collected.
    pub recipient_organizations_served: usize,
    /// Geographic areas covered, derived from host names.
    pub geographic_areas_reached: Vec<String>,
    /// Cumulative milestones crossed within the range.
    pub milestone_achievements: Vec<MilestoneAchievement>,
}

/// A cumulative milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneAchievement {
    /// Milestone label.
    pub milestone: String,
    /// Date the milestone was recorded.
    pub achieved_date: NaiveDate,
    /// Description for the report body.
    pub description: String,
}

/// Collective achievements section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectiveAchievements {
    /// Estimated volunteer headcount across hosts.
    pub total_volunteer_participation: i64,
    /// Hosts that joined within the date range.
    pub new_areas_activated: Vec<String>,
    /// Notable one-off events.
    pub special_event_successes: Vec<SpecialEvent>,
    /// Capacity trend for the trailing month.
    pub capacity_growth: CapacityGrowth,
}

/// A one-off event highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialEvent {
    /// Event name.
    pub event: String,
    /// When it happened.
    pub date: String,
    /// What it changed.
    pub impact: String,
}

/// Trailing-month capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityGrowth {
    /// Sandwiches collected in the trailing month.
    pub current_capacity: i64,
    /// Estimated growth percentage.
    pub growth_percentage: f64,
}

/// Operational health section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalHealth {
    /// Per-area consistency scores.
    pub coverage_consistency: Vec<CoverageEntry>,
    /// Areas that need resources.
    pub resource_needs: Vec<ResourceNeed>,
}

/// Consistency rating for one area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageEntry {
    /// Area (host) name.
    pub area: String,
    /// Score from 0 to 100.
    pub consistency_score: u32,
    /// Rating bucket.
    pub status: ConsistencyStatus,
}

/// Coverage rating buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyStatus {
    /// Consistently strong contributions.
    Excellent,
    /// Regular contributions.
    Good,
    /// Low or irregular contributions.
    NeedsAttention,
}

/// A resource gap at one area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceNeed {
    /// Area (host) name.
    pub area: String,
    /// What kind of resource is missing.
    pub need_type: String,
    /// Priority label.
    pub priority: String,
    /// What would help.
    pub description: String,
}

/// Support opportunities section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportOpportunities {
    /// Locations that would benefit from more volunteers.
    pub areas_needing_volunteers: Vec<VolunteerNeed>,
    /// Hosts that would benefit from a mentor pairing.
    pub buddy_system_candidates: Vec<BuddyCandidate>,
    /// High-activity areas ready to grow.
    pub expansion_opportunities: Vec<ExpansionOpportunity>,
}

/// Volunteer shortfall at one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerNeed {
    /// Area (host) name.
    pub area: String,
    /// Estimated current volunteers.
    pub current_volunteers: i64,
    /// Additional volunteers wanted.
    pub volunteers_needed: i64,
    /// Recommendation text.
    pub description: String,
}

/// A host suggested for the buddy system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuddyCandidate {
    /// Host name.
    pub host_name: String,
    /// Why a mentor would help.
    pub reason: String,
    /// Suggested mentor profile.
    pub potential_mentor: String,
}

/// An area ready for expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionOpportunity {
    /// Neighborhood label.
    pub neighborhood: String,
    /// Readiness score from 0 to 100.
    pub readiness_score: u32,
    /// Suggested next steps.
    pub next_steps: Vec<String>,
}

/// Celebration and stories section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrationStories {
    /// Milestone moments for the period.
    pub milestones_moments: Vec<MilestoneMoment>,
    /// Top-contributing hosts, highest first.
    pub volunteer_spotlights: Vec<Spotlight>,
    /// Feedback from recipient organizations.
    pub recipient_feedback: Vec<RecipientFeedback>,
    /// Cross-location collaborations.
    pub community_connections: Vec<CommunityConnection>,
}

/// A milestone moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneMoment {
    /// Headline.
    pub title: String,
    /// Date of the moment.
    pub date: NaiveDate,
    /// Description.
    pub description: String,
    /// Impact statement.
    pub impact: String,
}

/// A host spotlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spotlight {
    /// Host name.
    pub name: String,
    /// Contribution summary.
    pub contribution: String,
    /// Short story.
    pub story: String,
}

/// Recipient-side feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientFeedback {
    /// Organization name.
    pub organization: String,
    /// What they said.
    pub feedback: String,
    /// When they said it.
    pub date: NaiveDate,
}

/// A cross-location collaboration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityConnection {
    /// Connection name.
    pub connection: String,
    /// Who participates.
    pub participants: Vec<String>,
    /// What it produced.
    pub outcome: String,
}

/// A chart series for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    /// Chart kind.
    pub chart_type: ChartType,
    /// Chart title.
    pub title: String,
    /// Data points.
    pub data: Vec<ChartPoint>,
}

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Bar chart.
    Bar,
    /// Line chart.
    Line,
    /// Pie chart.
    Pie,
}

/// One labelled value on a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Point label.
    pub label: String,
    /// Point value.
    pub value: i64,
}
