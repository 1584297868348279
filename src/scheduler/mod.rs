//! Role schedulers: one week of assignments for one fixed role.
//!
//! Each scheduler resolves requirements and window plans per date and
//! delegates the actual slot filling to the
//! [`AssignmentEngine`](crate::engine::AssignmentEngine). The three
//! variants share one week-driving routine and differ only in which role
//! they are bound to and how they order the week's days.

mod cohort;
mod manager;
pub mod orchestrator;
mod sandwich;
mod stats;

pub use cohort::CohortScheduler;
pub use manager::ManagerScheduler;
pub use orchestrator::{build_week_roster, Orchestrator};
pub use sandwich::SandwichScheduler;
pub use stats::RosterStats;

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use log::info;

use crate::engine::{AssignmentEngine, WeeklyHoursLedger};
use crate::error::CoverageError;
use crate::models::{Assignment, Employee, Role, RosterConfig, Shift};
use crate::planning::{plan_for_day, requirements_for_day};

/// One role's week of assignments plus its fallback relaxations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleSchedule {
    /// Assignments in generation order.
    pub assignments: Vec<Assignment>,
    /// (date, role) pairs the weekend fallback accepted under-filled,
    /// mapped to the accepted floor.
    pub relaxed: BTreeMap<(NaiveDate, Role), u32>,
}

/// Generates one week of assignments for a fixed role.
///
/// Implementations are stateless apart from the per-run ledger created
/// inside `make_schedule`; selection by role happens at construction.
pub trait RoleScheduler {
    /// The role this scheduler staffs.
    fn role(&self) -> Role;

    /// Generates assignments for every shift of the week.
    fn make_schedule(
        &self,
        shifts: &[Shift],
        employees: &[Employee],
        cfg: &RosterConfig,
    ) -> Result<RoleSchedule, CoverageError>;
}

/// Shared week driver: orders the days, resolves requirements and window
/// plans, and feeds the engine one date at a time.
fn schedule_role_week(
    role: Role,
    shifts: &[Shift],
    employees: &[Employee],
    cfg: &RosterConfig,
    busy_days_first: bool,
) -> Result<RoleSchedule, CoverageError> {
    // One operating day per date; duplicates keep the lowest shift id.
    let mut week: Vec<&Shift> = shifts.iter().collect();
    week.sort_by_key(|s| (s.date, s.id));
    week.dedup_by_key(|s| s.date);
    if busy_days_first {
        week.sort_by_key(|s| (!cfg.is_busy_day(s.date), s.date));
    }

    let days: Vec<(&Shift, u32)> = week
        .into_iter()
        .map(|shift| {
            let needed = requirements_for_day(shift.date, cfg)
                .get(&role)
                .copied()
                .unwrap_or(0);
            (shift, needed)
        })
        .filter(|&(_, needed)| needed > 0)
        .collect();
    if days.is_empty() {
        return Ok(RoleSchedule::default());
    }

    let staff: Vec<Employee> = employees
        .iter()
        .filter(|e| e.primary_role == role)
        .cloned()
        .collect();
    if staff.is_empty() {
        let week_start = days.iter().map(|(s, _)| s.date).min().expect("non-empty");
        return Err(CoverageError::new(
            week_start,
            role,
            "no eligible employees for the week",
        ));
    }

    let engine = AssignmentEngine::new(cfg);
    let mut ledger = WeeklyHoursLedger::new();
    let mut schedule = RoleSchedule::default();

    for (shift, needed) in days {
        let plan = plan_for_day(role, shift.date, cfg);
        let mut assigned_today: HashSet<i64> = HashSet::new();
        let outcome = engine.assign_day(
            shift,
            role,
            needed,
            &plan,
            &staff,
            &mut ledger,
            &mut assigned_today,
        )?;
        if let Some(floor) = outcome.relaxed {
            schedule.relaxed.insert((shift.date, role), floor);
        }
        schedule.assignments.extend(outcome.assignments);
    }

    info!(
        "{} scheduler generated {} assignments",
        role,
        schedule.assignments.len()
    );
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn weekday_shifts() -> Vec<Shift> {
        (0..5)
            .map(|i| {
                Shift::new(
                    i + 1,
                    NaiveDate::from_ymd_opt(2025, 9, 1 + i as u32).unwrap(), // Mon..Fri
                    "2025-W36",
                )
            })
            .collect()
    }

    #[test]
    fn test_week_driver_skips_zero_requirement_days() {
        let mut cfg = RosterConfig::default();
        cfg.default_requirements = BTreeMap::from([(Role::Manager, 1)]);
        cfg.overrides.insert(
            NaiveDate::from_ymd_opt(2025, 9, 3).unwrap(),
            BTreeMap::from([(Role::Manager, 0)]),
        );
        let employees = vec![Employee::new(1, "M", Role::Manager)];

        let schedule =
            schedule_role_week(Role::Manager, &weekday_shifts(), &employees, &cfg, false).unwrap();
        assert_eq!(schedule.assignments.len(), 4);
        assert!(!schedule
            .assignments
            .iter()
            .any(|a| a.date == NaiveDate::from_ymd_opt(2025, 9, 3).unwrap()));
    }

    #[test]
    fn test_week_driver_dedups_same_date_shifts() {
        let mut cfg = RosterConfig::default();
        cfg.default_requirements = BTreeMap::from([(Role::Manager, 1)]);
        let employees = vec![Employee::new(1, "M", Role::Manager)];
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let shifts = vec![Shift::new(7, date, "2025-W36"), Shift::new(3, date, "2025-W36")];

        let schedule = schedule_role_week(Role::Manager, &shifts, &employees, &cfg, false).unwrap();
        assert_eq!(schedule.assignments.len(), 1);
        assert_eq!(schedule.assignments[0].shift_id, 3);
    }

    #[test]
    fn test_week_driver_no_staff_fails_up_front() {
        let cfg = RosterConfig::default();
        let err = schedule_role_week(Role::Sandwich, &weekday_shifts(), &[], &cfg, false).unwrap_err();
        assert_eq!(err.role, Role::Sandwich);
        assert!(err.reason.contains("no eligible employees"));
    }

    #[test]
    fn test_empty_week_is_empty_schedule() {
        let cfg = RosterConfig::default();
        let schedule = schedule_role_week(Role::Manager, &[], &[], &cfg, false).unwrap();
        assert!(schedule.assignments.is_empty());
    }
}
