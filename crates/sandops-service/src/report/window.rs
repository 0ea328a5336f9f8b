//! Collection week and comparison window calculation.
//!
//! Every window is an inclusive 7-calendar-day span. The canonical collection
//! week ends on a Thursday; callers may also supply a literal week-ending
//! date for historical reports.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Check whether a date falls inside this range (inclusive bounds).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A 7-calendar-day collection window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window; always `start + 6 days`.
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The window whose last day is the given date.
    pub fn ending(end: NaiveDate) -> Self {
        Self {
            start: end - Duration::days(6),
            end,
        }
    }

    /// The most recent completed collection week on/before the anchor:
    /// the window ending on the latest Thursday that is not after `anchor`.
    pub fn latest_collection_week(anchor: NaiveDate) -> Self {
        let days_past_thursday = (anchor.weekday().num_days_from_monday() + 7
            - Weekday::Thu.num_days_from_monday())
            % 7;
        Self::ending(anchor - Duration::days(i64::from(days_past_thursday)))
    }

    /// Check whether a date falls inside this window (inclusive bounds).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range().contains(date)
    }

    /// This window as a plain date range.
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start,
            end: self.end,
        }
    }

    /// The same window shifted back a number of whole weeks.
    pub fn shifted_back(&self, weeks: u32) -> Self {
        let delta = Duration::days(7 * i64::from(weeks));
        Self {
            start: self.start - delta,
            end: self.end - delta,
        }
    }

    /// The immediately prior window.
    pub fn prior_week(&self) -> Self {
        self.shifted_back(1)
    }

    /// The `count` most recent non-overlapping windows strictly before this
    /// one, most recent first.
    pub fn prior_weeks(&self, count: u32) -> Vec<Self> {
        (1..=count).map(|i| self.shifted_back(i)).collect()
    }
}

/// The calendar-month range containing the anchor date.
pub fn month_of(anchor: NaiveDate) -> DateRange {
    let start = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1)
        .expect("first day of month is always valid");
    let next_month = if anchor.month() == 12 {
        NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
    }
    .expect("first day of month is always valid");
    DateRange {
        start,
        end: next_month - Duration::days(1),
    }
}

/// The first day of the month `months` back from the anchor's month.
pub fn months_back(anchor: NaiveDate, months: u32) -> NaiveDate {
    let total = anchor.year() * 12 + anchor.month() as i32 - 1 - months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).expect("first day of month is always valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_ending_spans_seven_days() {
        let w = WeekWindow::ending(d(2025, 6, 5));
        assert_eq!(w.start, d(2025, 5, 30));
        assert_eq!(w.end - w.start, Duration::days(6));
    }

    #[test]
    fn test_latest_collection_week_snaps_to_thursday() {
        // 2025-06-05 is a Thursday; anchoring on any day of the following
        // week lands on it.
        assert_eq!(
            WeekWindow::latest_collection_week(d(2025, 6, 5)).end,
            d(2025, 6, 5)
        );
        assert_eq!(
            WeekWindow::latest_collection_week(d(2025, 6, 6)).end,
            d(2025, 6, 5)
        );
        assert_eq!(
            WeekWindow::latest_collection_week(d(2025, 6, 11)).end,
            d(2025, 6, 5)
        );
        assert_eq!(
            WeekWindow::latest_collection_week(d(2025, 6, 12)).end,
            d(2025, 6, 12)
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let w = WeekWindow::ending(d(2025, 6, 5));
        assert!(w.contains(d(2025, 5, 30)));
        assert!(w.contains(d(2025, 6, 5)));
        assert!(!w.contains(d(2025, 5, 29)));
        assert!(!w.contains(d(2025, 6, 6)));
    }

    #[test]
    fn test_prior_weeks_do_not_overlap() {
        let w = WeekWindow::ending(d(2025, 6, 5));
        let priors = w.prior_weeks(4);
        assert_eq!(priors.len(), 4);
        assert_eq!(priors[0].end, d(2025, 5, 29));
        assert_eq!(priors[3].end, d(2025, 5, 8));
        for pair in priors.windows(2) {
            assert_eq!(pair[0].start - pair[1].end, Duration::days(1));
        }
        // The most recent prior window abuts but never enters the current one.
        assert_eq!(w.start - priors[0].end, Duration::days(1));
    }

    #[test]
    fn test_month_of() {
        let m = month_of(d(2025, 6, 15));
        assert_eq!(m.start, d(2025, 6, 1));
        assert_eq!(m.end, d(2025, 6, 30));

        let dec = month_of(d(2024, 12, 31));
        assert_eq!(dec.start, d(2024, 12, 1));
        assert_eq!(dec.end, d(2024, 12, 31));
    }

    #[test]
    fn test_months_back_crosses_year_boundary() {
        assert_eq!(months_back(d(2025, 2, 15), 0), d(2025, 2, 1));
        assert_eq!(months_back(d(2025, 2, 15), 3), d(2024, 11, 1));
        assert_eq!(months_back(d(2025, 12, 1), 12), d(2024, 12, 1));
    }
}
