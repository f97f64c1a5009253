//! Schedule window: where each subject stands in its yearly chapter plan.
//!
//! The plan advances one chapter per curriculum week and wraps around at the
//! end of the list. Weeks are counted from the curriculum epoch.

use chrono::{DateTime, Utc};

use sahayak_core::constants::{CURRICULUM_EPOCH_SECS, CURRICULUM_WEEK_SECS};

use crate::curriculum::Chapter;

/// The current chapter and its neighbours for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow<'a> {
    pub current: &'a Chapter,
    pub next: &'a Chapter,
    pub previous: &'a Chapter,
}

/// Whole curriculum weeks elapsed since the epoch. Negative before it.
pub fn curriculum_week(now: DateTime<Utc>) -> i64 {
    (now.timestamp() - CURRICULUM_EPOCH_SECS).div_euclid(CURRICULUM_WEEK_SECS)
}

/// Window for the week containing `now`. `None` when there are no chapters.
pub fn schedule_window(chapters: &[Chapter], now: DateTime<Utc>) -> Option<ScheduleWindow<'_>> {
    window_for_week(chapters, curriculum_week(now))
}

/// Window for an explicit week index.
pub fn window_for_week(chapters: &[Chapter], week: i64) -> Option<ScheduleWindow<'_>> {
    if chapters.is_empty() {
        return None;
    }
    let len = chapters.len() as i64;
    let index = week.rem_euclid(len) as usize;
    let len = chapters.len();
    Some(ScheduleWindow {
        current: &chapters[index],
        next: &chapters[(index + 1) % len],
        previous: &chapters[(index + len - 1) % len],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn epoch_constant_matches_calendar_date() {
        assert_eq!(epoch().timestamp(), CURRICULUM_EPOCH_SECS);
    }

    #[test]
    fn week_boundaries() {
        assert_eq!(curriculum_week(epoch()), 0);
        assert_eq!(curriculum_week(epoch() + Duration::days(7) - Duration::seconds(1)), 0);
        assert_eq!(curriculum_week(epoch() + Duration::days(7)), 1);
        assert_eq!(curriculum_week(epoch() - Duration::seconds(1)), -1);
    }

    #[test]
    fn window_wraps_at_both_ends() {
        let table = crate::curriculum::chapters(6, "hindi");
        let last = window_for_week(table, 3).unwrap();
        assert_eq!(last.current.number, 4);
        assert_eq!(last.next.number, 1);

        let first = window_for_week(table, 4).unwrap();
        assert_eq!(first.current.number, 1);
        assert_eq!(first.previous.number, 4);
    }

    #[test]
    fn negative_weeks_use_euclidean_modulo() {
        let table = crate::curriculum::chapters(6, "hindi");
        let window = window_for_week(table, -1).unwrap();
        assert_eq!(window.current.number, 4);
        assert_eq!(window.next.number, 1);
    }

    #[test]
    fn empty_table_has_no_window() {
        assert!(window_for_week(&[], 5).is_none());
    }
}
