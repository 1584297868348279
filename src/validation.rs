//! Independent validation of a generated roster.
//!
//! A stateless re-check of every hard invariant over the complete merged
//! assignment set. It assumes nothing about engine internals: hours and
//! coverage are recomputed from the assignments, and requirements are
//! re-resolved from the config. Detects:
//! - References to unknown employee or shift ids
//! - Same-day overlapping assignments for one employee
//! - Weekly totals past the role or global hard cap
//! - Assignments outside an employee's primary role
//! - Coverage mismatches per (date, role)
//! - Work outside the café operating window
//!
//! The validator never repairs; all violations are collected and
//! reported together.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use chrono::{NaiveDate, Timelike};

use crate::models::{Employee, Role, Roster, RosterConfig, Shift};
use crate::planning::requirements_for_day;

/// Tolerance for floating-point hour totals.
const HOURS_EPSILON: f64 = 1e-6;

/// Validation outcome: `Ok(())` or every violation found.
pub type ValidationResult = Result<(), Vec<ConstraintViolation>>;

/// A single hard-constraint violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Human-readable description naming the entities involved.
    pub message: String,
}

/// Categories of hard-constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// An assignment references an employee that doesn't exist.
    UnknownEmployee,
    /// An assignment references a shift that doesn't exist.
    UnknownShift,
    /// An employee has overlapping assignments on one date.
    OverlappingAssignments,
    /// A weekly hour total exceeds the applicable hard cap.
    HardCapExceeded,
    /// An assignment's role differs from the employee's primary role.
    RoleMismatch,
    /// Coverage for a (date, role) misses its requirement.
    CoverageMismatch,
    /// An assignment falls outside the operating window rules.
    OutsideOperatingHours,
}

impl ConstraintViolation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a complete roster against all hard invariants.
///
/// `relaxed` marks (date, role) pairs the weekend fallback accepted
/// under-filled, mapped to the floor that applies instead of the exact
/// requirement. Relaxation is a run-time event, so it is the one input
/// that comes from the generation pass rather than the config.
pub fn validate_roster(
    roster: &Roster,
    employees: &[Employee],
    shifts: &[Shift],
    relaxed: &BTreeMap<(NaiveDate, Role), u32>,
    cfg: &RosterConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let employee_by_id: HashMap<i64, &Employee> = employees.iter().map(|e| (e.id, e)).collect();
    let shift_ids: HashSet<i64> = shifts.iter().map(|s| s.id).collect();

    // Referential integrity.
    for a in &roster.assignments {
        if !employee_by_id.contains_key(&a.employee_id) {
            errors.push(ConstraintViolation::new(
                ViolationKind::UnknownEmployee,
                format!(
                    "assignment on {} references unknown employee {}",
                    a.date, a.employee_id
                ),
            ));
        }
        if !shift_ids.contains(&a.shift_id) {
            errors.push(ConstraintViolation::new(
                ViolationKind::UnknownShift,
                format!("assignment on {} references unknown shift {}", a.date, a.shift_id),
            ));
        }
    }

    // No overlapping assignments per employee per date.
    let mut by_employee_date: BTreeMap<(i64, NaiveDate), Vec<usize>> = BTreeMap::new();
    for (i, a) in roster.assignments.iter().enumerate() {
        by_employee_date
            .entry((a.employee_id, a.date))
            .or_default()
            .push(i);
    }
    for ((emp_id, date), indices) in &by_employee_date {
        for (pos, &i) in indices.iter().enumerate() {
            for &j in &indices[pos + 1..] {
                let a1 = &roster.assignments[i];
                let a2 = &roster.assignments[j];
                if a1.start < a2.end && a2.start < a1.end {
                    errors.push(ConstraintViolation::new(
                        ViolationKind::OverlappingAssignments,
                        format!(
                            "employee {emp_id} has overlapping assignments on {date}: {}..{} and {}..{}",
                            a1.start, a1.end, a2.start, a2.end
                        ),
                    ));
                }
            }
        }
    }

    // Weekly hour caps per employee.
    for (emp_id, total) in roster.weekly_hours() {
        let Some(emp) = employee_by_id.get(&emp_id) else {
            continue; // already reported as unknown
        };
        let cap = cfg.hard_cap_for(emp.primary_role);
        if total > cap + HOURS_EPSILON {
            errors.push(ConstraintViolation::new(
                ViolationKind::HardCapExceeded,
                format!(
                    "employee {emp_id} exceeds weekly hard cap for {}: {total:.1}h > {cap}h",
                    emp.primary_role
                ),
            ));
        }
        if let Some(global_cap) = cfg.global_hard_cap {
            if total > global_cap + HOURS_EPSILON {
                errors.push(ConstraintViolation::new(
                    ViolationKind::HardCapExceeded,
                    format!(
                        "employee {emp_id} exceeds global hard cap: {total:.1}h > {global_cap}h"
                    ),
                ));
            }
        }
    }

    // Every assignment stays within the employee's primary role.
    for a in &roster.assignments {
        if let Some(emp) = employee_by_id.get(&a.employee_id) {
            if emp.primary_role != a.role {
                errors.push(ConstraintViolation::new(
                    ViolationKind::RoleMismatch,
                    format!(
                        "employee {} ({}) assigned to {} on {}",
                        a.employee_id, emp.primary_role, a.role, a.date
                    ),
                ));
            }
        }
    }

    // Coverage per (date, role), exact unless relaxed.
    let dates: HashSet<NaiveDate> = shifts.iter().map(|s| s.date).collect();
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    dates.sort_unstable();
    for date in dates {
        for (role, needed) in requirements_for_day(date, cfg) {
            if needed == 0 {
                continue;
            }
            let got = roster.coverage(date, role) as u32;
            match relaxed.get(&(date, role)) {
                Some(&floor) => {
                    if got < floor {
                        errors.push(ConstraintViolation::new(
                            ViolationKind::CoverageMismatch,
                            format!(
                                "coverage on {date} for {role}: got {got}, below relaxed floor {floor}"
                            ),
                        ));
                    }
                }
                None => {
                    if got != needed {
                        errors.push(ConstraintViolation::new(
                            ViolationKind::CoverageMismatch,
                            format!("coverage on {date} for {role}: expected {needed}, got {got}"),
                        ));
                    }
                }
            }
        }
    }

    // Operating-hours window. SANDWICH may start before opening for prep
    // but must still end by closing; everyone else stays inside the
    // window and ends on an exact hour boundary.
    let open = cfg.default_window.start;
    let close = cfg.default_window.end;
    for a in &roster.assignments {
        if a.role == Role::Sandwich {
            if a.end > close {
                errors.push(ConstraintViolation::new(
                    ViolationKind::OutsideOperatingHours,
                    format!(
                        "SANDWICH assignment for employee {} on {} ends after closing: {}",
                        a.employee_id, a.date, a.end
                    ),
                ));
            }
        } else {
            if a.start < open {
                errors.push(ConstraintViolation::new(
                    ViolationKind::OutsideOperatingHours,
                    format!(
                        "assignment for employee {} on {} starts before opening: {}",
                        a.employee_id, a.date, a.start
                    ),
                ));
            }
            if a.end > close {
                errors.push(ConstraintViolation::new(
                    ViolationKind::OutsideOperatingHours,
                    format!(
                        "assignment for employee {} on {} ends after closing: {}",
                        a.employee_id, a.date, a.end
                    ),
                ));
            }
            if a.end.minute() != 0 || a.end.second() != 0 {
                errors.push(ConstraintViolation::new(
                    ViolationKind::OutsideOperatingHours,
                    format!(
                        "assignment for employee {} on {} does not end on the hour: {}",
                        a.employee_id, a.date, a.end
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
