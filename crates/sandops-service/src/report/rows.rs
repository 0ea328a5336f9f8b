//! Typed detail rows for the community report, with CSV rendering.

use chrono::NaiveDate;
use serde::Serialize;

use sandops_core::error::{AppError, ErrorKind};
use sandops_core::result::AppResult;

/// One collection record in the detail listing.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionRow {
    /// Record id.
    pub id: i64,
    /// Collection date.
    pub date: NaiveDate,
    /// Host location name.
    pub host_name: String,
    /// Individual sandwiches.
    pub individual_sandwiches: i64,
    /// Group-collection sandwiches.
    pub group_collections: i64,
    /// Record total.
    pub total: i64,
}

/// One organization in the collective-achievements listing.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationRow {
    /// Organization (host) name.
    pub organization: String,
    /// Directory status.
    pub status: String,
    /// Total sandwiches contributed in range.
    pub total_contributions: i64,
    /// When the organization joined.
    pub join_date: NaiveDate,
}

/// One location in the operational-health listing.
#[derive(Debug, Clone, Serialize)]
pub struct HealthRow {
    /// Location name.
    pub location: String,
    /// Total sandwiches contributed in range.
    pub total_contributions: i64,
    /// Consistency label.
    pub consistency: String,
    /// Most recent collection date in range, if any.
    pub last_activity: Option<NaiveDate>,
    /// Whether the location needs support.
    pub support_needed: bool,
}

/// One location in the support-opportunities listing.
#[derive(Debug, Clone, Serialize)]
pub struct SupportRow {
    /// Location name.
    pub location: String,
    /// Opportunity classification.
    pub opportunity_type: String,
    /// Estimated current volunteers.
    pub current_volunteers: i64,
    /// Recommended coordinator action.
    pub recommended_action: String,
}

/// Detail rows for one report; the variant follows the report type.
#[derive(Debug, Clone)]
pub enum ReportRows {
    /// Raw collection records.
    Collections(Vec<CollectionRow>),
    /// Per-organization contributions.
    Organizations(Vec<OrganizationRow>),
    /// Per-location health assessment.
    Health(Vec<HealthRow>),
    /// Per-location support classification.
    Support(Vec<SupportRow>),
}

impl ReportRows {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Collections(rows) => rows.len(),
            Self::Organizations(rows) => rows.len(),
            Self::Health(rows) => rows.len(),
            Self::Support(rows) => rows.len(),
        }
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows as a JSON array for the report body.
    pub fn to_json(&self) -> AppResult<serde_json::Value> {
        let value = match self {
            Self::Collections(rows) => serde_json::to_value(rows)?,
            Self::Organizations(rows) => serde_json::to_value(rows)?,
            Self::Health(rows) => serde_json::to_value(rows)?,
            Self::Support(rows) => serde_json::to_value(rows)?,
        };
        Ok(value)
    }

    /// Rows rendered as a CSV document with a header record.
    pub fn to_csv(&self) -> AppResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        match self {
            Self::Collections(rows) => write_rows(&mut writer, rows)?,
            Self::Organizations(rows) => write_rows(&mut writer, rows)?,
            Self::Health(rows) => write_rows(&mut writer, rows)?,
            Self::Support(rows) => write_rows(&mut writer, rows)?,
        }
        writer
            .into_inner()
            .map_err(|e| AppError::render(format!("Failed to flush CSV output: {e}")))
    }
}

fn write_rows<T: Serialize>(writer: &mut csv::Writer<Vec<u8>>, rows: &[T]) -> AppResult<()> {
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::with_source(ErrorKind::Render, "Failed to encode CSV row", e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_csv_has_header_and_rows() {
        let rows = ReportRows::Collections(vec![CollectionRow {
            id: 7,
            date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            host_name: "Alpharetta".to_string(),
            individual_sandwiches: 300,
            group_collections: 100,
            total: 400,
        }]);
        let bytes = rows.to_csv().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,date,host_name,individual_sandwiches,group_collections,total"
        );
        assert_eq!(lines.next().unwrap(), "7,2025-06-05,Alpharetta,300,100,400");
    }

    #[test]
    fn test_health_csv_empty_optional_date() {
        let rows = ReportRows::Health(vec![HealthRow {
            location: "Dunwoody".to_string(),
            total_contributions: 0,
            consistency: "Needs Support".to_string(),
            last_activity: None,
            support_needed: true,
        }]);
        let text = String::from_utf8(rows.to_csv().unwrap()).unwrap();
        assert!(text.lines().nth(1).unwrap().contains("Dunwoody,0,Needs Support,,true"));
    }

    #[test]
    fn test_json_rows_round_trip() {
        let rows = ReportRows::Support(vec![SupportRow {
            location: "Roswell".to_string(),
            opportunity_type: "Stable Operations".to_string(),
            current_volunteers: 4,
            recommended_action: "Continue current operations".to_string(),
        }]);
        let value = rows.to_json().unwrap();
        assert_eq!(value[0]["location"], "Roswell");
        assert_eq!(rows.len(), 1);
    }
}
