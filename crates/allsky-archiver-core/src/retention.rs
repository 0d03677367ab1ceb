/// Retention threshold: decides whether a dated folder is old enough to
/// archive.
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Folders dated strictly before `now - DEFAULT_RETENTION_DAYS` are archived.
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

/// Cut-off instant, computed once at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionThreshold {
    cutoff: NaiveDateTime,
}

impl RetentionThreshold {
    /// Threshold `retention_days` before `now`.
    pub fn new(now: NaiveDateTime, retention_days: i64) -> Self {
        Self {
            cutoff: now - Duration::days(retention_days),
        }
    }

    pub fn cutoff(&self) -> NaiveDateTime {
        self.cutoff
    }

    /// `true` when midnight at the start of `date` is strictly earlier than
    /// the cut-off.
    pub fn is_expired(&self, date: NaiveDate) -> bool {
        date.and_time(NaiveTime::MIN) < self.cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cutoff_is_seven_days_before_now() {
        let t = RetentionThreshold::new(at(2024, 3, 15, 14, 30), DEFAULT_RETENTION_DAYS);
        assert_eq!(t.cutoff(), at(2024, 3, 8, 14, 30));
    }

    #[test]
    fn old_folder_is_expired() {
        let t = RetentionThreshold::new(at(2024, 3, 15, 14, 30), DEFAULT_RETENTION_DAYS);
        assert!(t.is_expired(date(2020, 1, 1)));
        assert!(t.is_expired(date(2024, 3, 7)));
    }

    /// The folder dated exactly seven days ago counts from its midnight, so
    /// it is expired once the run starts after midnight.
    #[test]
    fn seven_days_ago_is_expired_after_midnight() {
        let t = RetentionThreshold::new(at(2024, 3, 15, 0, 1), DEFAULT_RETENTION_DAYS);
        assert!(t.is_expired(date(2024, 3, 8)));
    }

    /// Strictly-before: equal to the cut-off is kept.
    #[test]
    fn folder_exactly_at_cutoff_is_kept() {
        let t = RetentionThreshold::new(at(2024, 3, 15, 0, 0), DEFAULT_RETENTION_DAYS);
        assert!(!t.is_expired(date(2024, 3, 8)));
    }

    #[test]
    fn recent_and_future_folders_are_kept() {
        let t = RetentionThreshold::new(at(2024, 3, 15, 14, 30), DEFAULT_RETENTION_DAYS);
        assert!(!t.is_expired(date(2024, 3, 9)));
        assert!(!t.is_expired(date(2024, 3, 15)));
        assert!(!t.is_expired(date(2099, 12, 31)));
    }

    /// Crossing a month and year boundary.
    #[test]
    fn cutoff_crosses_year_boundary() {
        let t = RetentionThreshold::new(at(2024, 1, 3, 12, 0), DEFAULT_RETENTION_DAYS);
        assert_eq!(t.cutoff(), at(2023, 12, 27, 12, 0));
        assert!(t.is_expired(date(2023, 12, 27)));
        assert!(!t.is_expired(date(2023, 12, 28)));
    }
}
