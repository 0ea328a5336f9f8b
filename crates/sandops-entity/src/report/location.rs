//! Per-location classification for the weekly report.

use serde::{Deserialize, Serialize};

/// Week-over-week direction of a location's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Total grew beyond the noise band.
    Up,
    /// Total fell beyond the noise band.
    Down,
    /// Total held within the noise band.
    Stable,
}

impl Trend {
    /// Short label used by the PDF renderer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "steady",
        }
    }
}

/// Classification bucket for a location's weekly total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    /// Weekly total above the high-performer threshold.
    HighPerformer,
    /// Everything between zero and the threshold.
    SteadyContributor,
    /// No collections this week.
    NeedsAttention,
}

impl LocationStatus {
    /// Display ordering: high performers first, needs-attention last.
    pub fn priority(&self) -> u8 {
        match self {
            Self::HighPerformer => 0,
            Self::SteadyContributor => 1,
            Self::NeedsAttention => 2,
        }
    }
}

/// One location's line in the weekly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReport {
    /// Host location name.
    pub name: String,
    /// Individual sandwiches collected in the window.
    pub individual: i64,
    /// Group sandwiches collected in the window.
    pub group: i64,
    /// Window total.
    pub total: i64,
    /// Direction versus the prior week.
    pub trend: Trend,
    /// Classification bucket.
    pub status: LocationStatus,
    /// Flags needing coordinator follow-up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_priority_ordering() {
        assert!(LocationStatus::HighPerformer.priority() < LocationStatus::SteadyContributor.priority());
        assert!(LocationStatus::SteadyContributor.priority() < LocationStatus::NeedsAttention.priority());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&LocationStatus::HighPerformer).unwrap(),
            "\"high_performer\""
        );
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
    }
}
