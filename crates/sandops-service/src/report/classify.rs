//! Trend and status classification for locations and headline deltas.

use sandops_entity::report::location::{LocationReport, LocationStatus, Trend};

/// Relative change of `current` versus `prior`.
///
/// `None` when there is no prior data to compare against; callers must not
/// collapse that into "no change".
pub fn relative_change(current: i64, prior: i64) -> Option<f64> {
    if prior == 0 {
        None
    } else {
        Some((current - prior) as f64 / prior as f64)
    }
}

/// `numerator / denominator`, or `None` with an empty denominator.
pub fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Classify the week-over-week direction of a location's total.
///
/// Changes within `±noise_ratio` count as stable. A location with no prior
/// data trends up as soon as it collects anything.
pub fn classify_trend(current: i64, prior: i64, noise_ratio: f64) -> Trend {
    let Some(change) = relative_change(current, prior) else {
        return if current > 0 { Trend::Up } else { Trend::Stable };
    };
    if change > noise_ratio {
        Trend::Up
    } else if change < -noise_ratio {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Classify a location's weekly total into a status bucket.
///
/// A pure function of the total: strictly above the threshold is a high
/// performer, exactly zero needs attention, everything else is steady.
pub fn classify_status(total: i64, high_performer_threshold: i64) -> LocationStatus {
    if total > high_performer_threshold {
        LocationStatus::HighPerformer
    } else if total == 0 {
        LocationStatus::NeedsAttention
    } else {
        LocationStatus::SteadyContributor
    }
}

/// Detect a sustained decline over recent weekly totals.
///
/// `history` is oldest-first and ends with the current week. Returns true
/// when the last `decline_weeks` week-over-week steps all decreased.
pub fn is_declining(history: &[i64], decline_weeks: usize) -> bool {
    if decline_weeks == 0 || history.len() < decline_weeks + 1 {
        return false;
    }
    history
        .windows(2)
        .rev()
        .take(decline_weeks)
        .all(|pair| pair[1] < pair[0])
}

/// Order locations for display: status priority first, then total descending.
pub fn sort_for_display(locations: &mut [LocationReport]) {
    locations.sort_by(|a, b| {
        a.status
            .priority()
            .cmp(&b.status.priority())
            .then(b.total.cmp(&a.total))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(classify_status(801, 800), LocationStatus::HighPerformer);
        assert_eq!(classify_status(800, 800), LocationStatus::SteadyContributor);
        assert_eq!(classify_status(1, 800), LocationStatus::SteadyContributor);
        assert_eq!(classify_status(0, 800), LocationStatus::NeedsAttention);
    }

    #[test]
    fn test_relative_change() {
        assert_eq!(relative_change(1100, 1000), Some(0.1));
        assert_eq!(relative_change(900, 1000), Some(-0.1));
        // No prior data is not "no change".
        assert_eq!(relative_change(500, 0), None);
    }

    #[test]
    fn test_trend_noise_band() {
        assert_eq!(classify_trend(1100, 1000, 0.10), Trend::Stable);
        assert_eq!(classify_trend(1101, 1000, 0.10), Trend::Up);
        assert_eq!(classify_trend(899, 1000, 0.10), Trend::Down);
        assert_eq!(classify_trend(900, 1000, 0.10), Trend::Stable);
    }

    #[test]
    fn test_trend_without_prior() {
        assert_eq!(classify_trend(10, 0, 0.10), Trend::Up);
        assert_eq!(classify_trend(0, 0, 0.10), Trend::Stable);
    }

    #[test]
    fn test_is_declining() {
        assert!(is_declining(&[500, 400, 300, 200], 3));
        assert!(!is_declining(&[500, 400, 450, 200], 3));
        // Not enough history for three declining steps.
        assert!(!is_declining(&[400, 300, 200], 3));
        // Longer history only needs the recent steps to decline.
        assert!(is_declining(&[100, 500, 400, 300, 200], 3));
    }

    #[test]
    fn test_sort_for_display() {
        let mut locations = vec![
            location("Dunwoody", 0, LocationStatus::NeedsAttention),
            location("Alpharetta", 900, LocationStatus::HighPerformer),
            location("Roswell", 400, LocationStatus::SteadyContributor),
            location("Decatur", 650, LocationStatus::SteadyContributor),
        ];
        sort_for_display(&mut locations);
        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Alpharetta", "Decatur", "Roswell", "Dunwoody"]);
    }

    fn location(name: &str, total: i64, status: LocationStatus) -> LocationReport {
        LocationReport {
            name: name.to_string(),
            individual: total,
            group: 0,
            total,
            trend: Trend::Stable,
            status,
            issues: None,
        }
    }
}
