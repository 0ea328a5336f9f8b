//! Weekly submission status checks.
//!
//! Compares the active host directory against the collections logged for the
//! current collection week so coordinators can chase missing submissions.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use sandops_core::result::AppResult;
use sandops_database::repositories::collection::CollectionRepository;
use sandops_database::repositories::host::HostRepository;
use sandops_entity::collection::SandwichCollection;
use sandops_entity::host::{Host, HostStatus};

use crate::report::window::WeekWindow;

/// Submission state for one expected host location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionStatus {
    /// Host location name.
    pub location: String,
    /// Whether the host submitted during the current collection week.
    pub has_submitted: bool,
    /// Most recent submission date on record, if any.
    pub last_submission_date: Option<NaiveDate>,
    /// First day of the current window for hosts that have not submitted.
    pub missing_since: Option<NaiveDate>,
}

/// Checks which active hosts have submitted for the current week.
#[derive(Debug, Clone)]
pub struct MonitoringService {
    /// Collection repository.
    collection_repo: Arc<CollectionRepository>,
    /// Host repository.
    host_repo: Arc<HostRepository>,
}

impl MonitoringService {
    /// Creates a new monitoring service.
    pub fn new(collection_repo: Arc<CollectionRepository>, host_repo: Arc<HostRepository>) -> Self {
        Self {
            collection_repo,
            host_repo,
        }
    }

    /// Submission status for every active host in the current week.
    pub async fn check_weekly_submissions(&self) -> AppResult<Vec<SubmissionStatus>> {
        let window = WeekWindow::latest_collection_week(Utc::now().date_naive());
        let collections = self.collection_repo.find_all().await?;
        let hosts = self.host_repo.find_by_status(HostStatus::Active).await?;

        let statuses = submission_status(&hosts, &collections, &window);
        let missing = statuses.iter().filter(|s| !s.has_submitted).count();
        info!(
            week_start = %window.start,
            week_end = %window.end,
            expected = statuses.len(),
            missing,
            "Checked weekly submissions"
        );
        Ok(statuses)
    }
}

/// Compute per-host submission status for a window.
///
/// Host names are matched case-insensitively after trimming, since manual
/// entry drifts from the directory spelling.
pub fn submission_status(
    hosts: &[Host],
    collections: &[SandwichCollection],
    window: &WeekWindow,
) -> Vec<SubmissionStatus> {
    hosts
        .iter()
        .map(|host| {
            let expected = normalize(&host.name);
            let mut last_submission_date = None;
            let mut has_submitted = false;

            for record in collections {
                if normalize(&record.host_name) != expected {
                    continue;
                }
                if last_submission_date.is_none_or(|d| record.collection_date > d) {
                    last_submission_date = Some(record.collection_date);
                }
                if window.contains(record.collection_date) {
                    has_submitted = true;
                }
            }

            SubmissionStatus {
                location: host.name.clone(),
                has_submitted,
                last_submission_date,
                missing_since: (!has_submitted).then_some(window.start),
            }
        })
        .collect()
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn host(name: &str) -> Host {
        Host {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: None,
            status: HostStatus::Active,
            notes: None,
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    fn record(date: NaiveDate, host: &str) -> SandwichCollection {
        SandwichCollection {
            id: 0,
            collection_date: date,
            host_name: host.to_string(),
            individual_sandwiches: 100,
            group1_count: 0,
            group2_count: 0,
            submitted_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_submitted_and_missing_hosts() {
        let window = WeekWindow::ending(d(2025, 6, 5));
        let hosts = vec![host("Alpharetta"), host("Dunwoody")];
        let collections = vec![
            record(d(2025, 6, 2), "alpharetta "),
            record(d(2025, 5, 15), "Dunwoody"),
        ];

        let statuses = submission_status(&hosts, &collections, &window);

        let alpharetta = &statuses[0];
        assert!(alpharetta.has_submitted);
        assert_eq!(alpharetta.last_submission_date, Some(d(2025, 6, 2)));
        assert_eq!(alpharetta.missing_since, None);

        let dunwoody = &statuses[1];
        assert!(!dunwoody.has_submitted);
        assert_eq!(dunwoody.last_submission_date, Some(d(2025, 5, 15)));
        assert_eq!(dunwoody.missing_since, Some(window.start));
    }

    #[test]
    fn test_host_with_no_history() {
        let window = WeekWindow::ending(d(2025, 6, 5));
        let statuses = submission_status(&[host("Roswell")], &[], &window);
        assert!(!statuses[0].has_submitted);
        assert_eq!(statuses[0].last_submission_date, None);
    }
}
