//! Shift model.
//!
//! A shift is one operating day of the café. Time ranges are derived per
//! role and slot by the planners, not stored here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One operating day within a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: i64,
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// ISO week identifier, e.g. `2025-W36`.
    pub week_id: String,
}

impl Shift {
    /// Creates a new shift.
    pub fn new(id: i64, date: NaiveDate, week_id: impl Into<String>) -> Self {
        Self {
            id,
            date,
            week_id: week_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_new() {
        let s = Shift::new(1, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), "2025-W36");
        assert_eq!(s.id, 1);
        assert_eq!(s.week_id, "2025-W36");
    }
}
