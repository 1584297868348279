//! Time window model.
//!
//! A window is a same-day interval [start, end) in wall-clock time.
//! All hour bookkeeping (ledgers, caps, penalties) derives from
//! `duration_hours`, so fractional windows such as 05:00–13:30 count
//! as 8.5 hours.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A same-day time interval [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive). Must be after `start`.
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Convenience constructor from hour/minute pairs.
    ///
    /// # Panics
    /// Panics on out-of-range components; intended for literals.
    pub fn from_hm(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Self {
        Self {
            start: NaiveTime::from_hms_opt(start_h, start_m, 0).expect("valid start time"),
            end: NaiveTime::from_hms_opt(end_h, end_m, 0).expect("valid end time"),
        }
    }

    /// Duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Whether two windows overlap in time.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_whole_hours() {
        let w = TimeWindow::from_hm(7, 0, 15, 0);
        assert_eq!(w.duration_hours(), 8.0);
    }

    #[test]
    fn test_duration_fractional() {
        let w = TimeWindow::from_hm(5, 0, 13, 30);
        assert_eq!(w.duration_hours(), 8.5);
    }

    #[test]
    fn test_overlap() {
        let a = TimeWindow::from_hm(7, 0, 12, 0);
        let b = TimeWindow::from_hm(11, 0, 15, 0);
        let c = TimeWindow::from_hm(12, 0, 15, 0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // half-open: touching endpoints don't overlap
    }
}
