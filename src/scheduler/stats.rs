//! Roster quality statistics.
//!
//! Soft-quality reporting over a finished roster: coverage per day and
//! role, hours per employee, and the hour spread within each role
//! cohort. Large spreads are reported as warnings, never errors; hard
//! invariants belong to the validator.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::models::{Employee, Role, Roster};

/// Summary statistics for a completed roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    /// Total number of assignments.
    pub total_assignments: usize,
    /// Assignment counts per (date, role).
    pub coverage: BTreeMap<(NaiveDate, Role), usize>,
    /// Weekly hours per employee, including cohort members with none.
    pub hours_by_employee: BTreeMap<i64, f64>,
    /// Max-minus-min weekly hours within each role cohort.
    pub fairness_spread_by_role: BTreeMap<Role, f64>,
}

impl RosterStats {
    /// Computes statistics from a roster and its staff list.
    ///
    /// `employees` defines the cohorts, so idle staff pull a cohort's
    /// minimum down to zero and show up in the spread.
    pub fn calculate(roster: &Roster, employees: &[Employee]) -> Self {
        let worked = roster.weekly_hours();
        let mut hours_by_employee = BTreeMap::new();
        for emp in employees {
            hours_by_employee.insert(emp.id, worked.get(&emp.id).copied().unwrap_or(0.0));
        }

        let mut fairness_spread_by_role = BTreeMap::new();
        for emp in employees {
            let cohort: Vec<f64> = employees
                .iter()
                .filter(|e| e.primary_role == emp.primary_role)
                .map(|e| hours_by_employee[&e.id])
                .collect();
            let min = cohort.iter().copied().fold(f64::INFINITY, f64::min);
            let max = cohort.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            fairness_spread_by_role.insert(emp.primary_role, max - min);
        }

        Self {
            total_assignments: roster.len(),
            coverage: roster.coverage_counts(),
            hours_by_employee,
            fairness_spread_by_role,
        }
    }

    /// Warnings for cohorts whose hour spread exceeds `max_spread_hours`.
    pub fn fairness_warnings(&self, max_spread_hours: f64) -> Vec<String> {
        self.fairness_spread_by_role
            .iter()
            .filter(|(_, &spread)| spread > max_spread_hours)
            .map(|(role, spread)| {
                format!("{role} cohort hour spread {spread:.1}h exceeds {max_spread_hours:.1}h")
            })
            .collect()
    }

    /// Human-readable summary for log output.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Coverage per day per role:");
        for ((date, role), count) in &self.coverage {
            let _ = writeln!(out, "  {date} {role}: {count}");
        }
        let _ = writeln!(out, "Hours per employee (week):");
        for (emp_id, hours) in &self.hours_by_employee {
            let _ = writeln!(out, "  {emp_id}: {hours:.1}h");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, DayType, ShiftType, TimeWindow};
    use chrono::NaiveDate;

    fn assignment(emp: i64, role: Role, day: u32) -> Assignment {
        let w = TimeWindow::from_hm(7, 0, 15, 0);
        Assignment {
            shift_id: day as i64,
            employee_id: emp,
            role,
            date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            start: w.start,
            end: w.end,
            shift_type: ShiftType::WeekdaySingle,
            day_type: DayType::Weekday,
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            Employee::new(2, "B2", Role::Barista),
            Employee::new(3, "B3", Role::Barista),
            Employee::new(4, "W4", Role::Waiter),
        ]
    }

    #[test]
    fn test_stats_basic() {
        let mut roster = Roster::new();
        roster.add(assignment(2, Role::Barista, 1));
        roster.add(assignment(2, Role::Barista, 2));
        roster.add(assignment(3, Role::Barista, 1));

        let stats = RosterStats::calculate(&roster, &staff());
        assert_eq!(stats.total_assignments, 3);
        assert_eq!(stats.hours_by_employee[&2], 16.0);
        assert_eq!(stats.hours_by_employee[&3], 8.0);
        // Idle waiter still appears.
        assert_eq!(stats.hours_by_employee[&4], 0.0);
        assert_eq!(
            stats.coverage[&(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), Role::Barista)],
            2
        );
    }

    #[test]
    fn test_fairness_spread_and_warnings() {
        let mut roster = Roster::new();
        roster.add(assignment(2, Role::Barista, 1));
        roster.add(assignment(2, Role::Barista, 2));
        roster.add(assignment(3, Role::Barista, 1));

        let stats = RosterStats::calculate(&roster, &staff());
        assert_eq!(stats.fairness_spread_by_role[&Role::Barista], 8.0);
        assert_eq!(stats.fairness_spread_by_role[&Role::Waiter], 0.0);

        let warnings = stats.fairness_warnings(4.0);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("BARISTA"));

        assert!(stats.fairness_warnings(10.0).is_empty());
    }

    #[test]
    fn test_summary_mentions_entities() {
        let mut roster = Roster::new();
        roster.add(assignment(2, Role::Barista, 1));
        let stats = RosterStats::calculate(&roster, &staff());
        let text = stats.summary();
        assert!(text.contains("BARISTA"));
        assert!(text.contains("2: 8.0h"));
    }
}
