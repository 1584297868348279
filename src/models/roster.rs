//! Roster (solution) model.
//!
//! A roster is the complete set of assignments for one week. It carries
//! no scheduling state of its own; query helpers recompute everything
//! from the assignment list so the validator and statistics can stay
//! independent of the engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Assignment, Role};

/// A complete weekly roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// All assignments for the week, in generation order.
    pub assignments: Vec<Assignment>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Appends a batch of assignments.
    pub fn extend(&mut self, assignments: impl IntoIterator<Item = Assignment>) {
        self.assignments.extend(assignments);
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// All assignments for one employee.
    pub fn for_employee(&self, employee_id: i64) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .collect()
    }

    /// All assignments on one date.
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.date == date).collect()
    }

    /// Total hours worked by one employee across the week.
    pub fn hours_for_employee(&self, employee_id: i64) -> f64 {
        self.for_employee(employee_id)
            .iter()
            .map(|a| a.duration_hours())
            .sum()
    }

    /// Weekly hours per employee, keyed by id.
    pub fn weekly_hours(&self) -> BTreeMap<i64, f64> {
        let mut hours = BTreeMap::new();
        for a in &self.assignments {
            *hours.entry(a.employee_id).or_insert(0.0) += a.duration_hours();
        }
        hours
    }

    /// How many assignments cover a given (date, role).
    pub fn coverage(&self, date: NaiveDate, role: Role) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.date == date && a.role == role)
            .count()
    }

    /// Assignment counts per (date, role).
    pub fn coverage_counts(&self) -> BTreeMap<(NaiveDate, Role), usize> {
        let mut counts = BTreeMap::new();
        for a in &self.assignments {
            *counts.entry((a.date, a.role)).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayType, ShiftType};
    use chrono::NaiveTime;

    fn assignment(emp: i64, role: Role, day: u32, start_h: u32, end_h: u32) -> Assignment {
        Assignment {
            shift_id: day as i64,
            employee_id: emp,
            role,
            date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            start: NaiveTime::from_hms_opt(start_h, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end_h, 0, 0).unwrap(),
            shift_type: ShiftType::WeekdaySingle,
            day_type: DayType::Weekday,
        }
    }

    fn sample() -> Roster {
        let mut r = Roster::new();
        r.add(assignment(1, Role::Manager, 1, 7, 15));
        r.add(assignment(2, Role::Barista, 1, 7, 15));
        r.add(assignment(2, Role::Barista, 2, 7, 15));
        r.add(assignment(3, Role::Barista, 2, 7, 15));
        r
    }

    #[test]
    fn test_weekly_hours() {
        let hours = sample().weekly_hours();
        assert_eq!(hours[&1], 8.0);
        assert_eq!(hours[&2], 16.0);
        assert_eq!(hours[&3], 8.0);
    }

    #[test]
    fn test_coverage() {
        let r = sample();
        let d1 = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        assert_eq!(r.coverage(d1, Role::Barista), 1);
        assert_eq!(r.coverage(d2, Role::Barista), 2);
        assert_eq!(r.coverage(d2, Role::Manager), 0);
        assert_eq!(r.coverage_counts()[&(d1, Role::Manager)], 1);
    }

    #[test]
    fn test_for_employee() {
        let r = sample();
        assert_eq!(r.for_employee(2).len(), 2);
        assert_eq!(r.hours_for_employee(2), 16.0);
        assert!(r.for_employee(99).is_empty());
    }
}
