//! Assignment model.
//!
//! An assignment places one employee on one role-slot of one shift, with
//! concrete start/end times and pattern labels for downstream export.
//!
//! Invariants (enforced by the engine, re-checked by the validator):
//! at most one assignment per (employee, date); exactly one per
//! (shift, role, slot) under normal coverage.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{Role, TimeWindow};

/// Which window pattern produced an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Single full window on a regular day.
    WeekdaySingle,
    /// Single full window on a busy day (e.g. managers).
    WeekendSingle,
    /// One of the staggered busy-day windows.
    WeekendDouble,
    /// Extra default-window assignment placed by the fallback policy.
    WeekendFallbackSingle,
}

/// Day classification an assignment was made under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    /// Busy day (commonly Saturday/Sunday; configurable).
    #[serde(rename = "weekend")]
    Busy,
}

/// One employee on one role-slot of one shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Shift this assignment belongs to.
    pub shift_id: i64,
    /// Assigned employee.
    pub employee_id: i64,
    /// Role the slot was opened for. Always the employee's primary role.
    pub role: Role,
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Work start.
    pub start: NaiveTime,
    /// Work end.
    pub end: NaiveTime,
    /// Window pattern label.
    pub shift_type: ShiftType,
    /// Day classification label.
    pub day_type: DayType,
}

impl Assignment {
    /// Worked duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        self.window().duration_hours()
    }

    /// The assignment's time window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Whether this assignment overlaps another in time on the same date
    /// for the same employee.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
            && self.date == other.date
            && self.window().overlaps(&other.window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignment {
        Assignment {
            shift_id: 1,
            employee_id: 2,
            role: Role::Barista,
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            shift_type: ShiftType::WeekdaySingle,
            day_type: DayType::Weekday,
        }
    }

    #[test]
    fn test_duration() {
        assert_eq!(sample().duration_hours(), 8.0);
    }

    #[test]
    fn test_conflicts() {
        let a = sample();
        let mut b = sample();
        b.start = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
        assert!(a.conflicts_with(&b));

        b.employee_id = 3;
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn test_export_labels() {
        // Export shape consumed by the persistence collaborator.
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["role"], "BARISTA");
        assert_eq!(json["shift_type"], "weekday_single");
        assert_eq!(json["day_type"], "weekday");
    }
}
