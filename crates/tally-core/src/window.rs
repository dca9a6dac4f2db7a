//! Analysis window resolution
//!
//! Maps a selected [`TimeRange`] and a reference "now" date to a concrete
//! start/end pair and the bucket granularity used for charting.

use chrono::{Duration, Months, NaiveDate};

use crate::models::{Granularity, TimeRange};

/// A resolved chart window: inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub granularity: Granularity,
}

/// Resolve a range selection against a reference date
///
/// - `weekly`: now − 7 days, day buckets
/// - `monthly`: now − 1 calendar month, day buckets
/// - `yearly`: now − 1 calendar year, month buckets
///
/// Unknown tokens never reach this function; `TimeRange::from_str` is the
/// failure point for those.
pub fn resolve_window(range: TimeRange, now: NaiveDate) -> ResolvedWindow {
    let (start, granularity) = match range {
        TimeRange::Weekly => (now - Duration::days(7), Granularity::Day),
        TimeRange::Monthly => (now - Months::new(1), Granularity::Day),
        TimeRange::Yearly => (now - Months::new(12), Granularity::Month),
    };

    ResolvedWindow {
        start,
        end: now,
        granularity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_window() {
        let w = resolve_window(TimeRange::Weekly, date(2025, 6, 15));
        assert_eq!(w.start, date(2025, 6, 8));
        assert_eq!(w.end, date(2025, 6, 15));
        assert_eq!(w.granularity, Granularity::Day);
    }

    #[test]
    fn test_monthly_window() {
        let w = resolve_window(TimeRange::Monthly, date(2025, 6, 15));
        assert_eq!(w.start, date(2025, 5, 15));
        assert_eq!(w.granularity, Granularity::Day);
    }

    #[test]
    fn test_monthly_window_clamps_month_end() {
        // March 31 minus one calendar month lands on the last day of February
        let w = resolve_window(TimeRange::Monthly, date(2025, 3, 31));
        assert_eq!(w.start, date(2025, 2, 28));
    }

    #[test]
    fn test_yearly_window() {
        let w = resolve_window(TimeRange::Yearly, date(2025, 6, 15));
        assert_eq!(w.start, date(2024, 6, 15));
        assert_eq!(w.granularity, Granularity::Month);
    }
}
