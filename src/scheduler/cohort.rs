//! Front-of-house cohort scheduler: BARISTA and WAITER.
//!
//! Both roles share the same week shape (a single full shift on regular
//! days, staggered windows on busy days), so one scheduler covers both,
//! bound to a concrete role at construction.

use super::{schedule_role_week, RoleSchedule, RoleScheduler};
use crate::error::{ConfigError, CoverageError};
use crate::models::{Employee, Role, RosterConfig, Shift};

/// Scheduler for the front-of-house cohort roles.
#[derive(Debug, Clone, Copy)]
pub struct CohortScheduler {
    role: Role,
}

impl CohortScheduler {
    /// Creates a cohort scheduler for BARISTA or WAITER.
    ///
    /// Any other role is a configuration error.
    pub fn new(role: Role) -> Result<Self, ConfigError> {
        match role {
            Role::Barista | Role::Waiter => Ok(Self { role }),
            other => Err(ConfigError::UnsupportedCohortRole(other)),
        }
    }
}

impl RoleScheduler for CohortScheduler {
    fn role(&self) -> Role {
        self.role
    }

    fn make_schedule(
        &self,
        shifts: &[Shift],
        employees: &[Employee],
        cfg: &RosterConfig,
    ) -> Result<RoleSchedule, CoverageError> {
        schedule_role_week(self.role, shifts, employees, cfg, cfg.schedule_busy_days_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn weekday_shifts() -> Vec<Shift> {
        (0..5)
            .map(|i| {
                Shift::new(
                    i + 1,
                    NaiveDate::from_ymd_opt(2025, 9, 1 + i as u32).unwrap(),
                    "2025-W36",
                )
            })
            .collect()
    }

    #[test]
    fn test_rejects_non_cohort_roles() {
        assert!(CohortScheduler::new(Role::Barista).is_ok());
        assert!(CohortScheduler::new(Role::Waiter).is_ok());
        assert!(matches!(
            CohortScheduler::new(Role::Manager),
            Err(ConfigError::UnsupportedCohortRole(Role::Manager))
        ));
        assert!(CohortScheduler::new(Role::Sandwich).is_err());
    }

    #[test]
    fn test_two_baristas_split_the_week_evenly() {
        let mut cfg = RosterConfig::default();
        cfg.default_requirements = BTreeMap::from([(Role::Barista, 2)]);
        let staff = vec![
            Employee::new(2, "B2", Role::Barista)
                .with_coffee(5.0)
                .with_speed(4.0)
                .with_customer_service(3.0),
            Employee::new(3, "B3", Role::Barista)
                .with_coffee(4.0)
                .with_speed(3.0)
                .with_customer_service(4.0),
        ];

        let schedule = CohortScheduler::new(Role::Barista)
            .unwrap()
            .make_schedule(&weekday_shifts(), &staff, &cfg)
            .unwrap();

        assert_eq!(schedule.assignments.len(), 10);
        let count = |id: i64| {
            schedule
                .assignments
                .iter()
                .filter(|a| a.employee_id == id)
                .count()
        };
        assert_eq!(count(2), 5);
        assert_eq!(count(3), 5);
    }

    #[test]
    fn test_fairness_prefers_fewer_hours() {
        // One slot per day and equal skills: the cohort penalty forces
        // strict alternation instead of repeating the first pick.
        let mut cfg = RosterConfig::default();
        cfg.default_requirements = BTreeMap::from([(Role::Waiter, 1)]);
        let staff = vec![
            Employee::new(4, "W4", Role::Waiter).with_customer_service(4.0),
            Employee::new(6, "W6", Role::Waiter).with_customer_service(4.0),
        ];

        let schedule = CohortScheduler::new(Role::Waiter)
            .unwrap()
            .make_schedule(&weekday_shifts(), &staff, &cfg)
            .unwrap();

        let ids: Vec<i64> = schedule.assignments.iter().map(|a| a.employee_id).collect();
        assert_eq!(ids, vec![4, 6, 4, 6, 4]);
    }

    #[test]
    fn test_ignores_other_roles_in_employee_list() {
        let mut cfg = RosterConfig::default();
        cfg.default_requirements = BTreeMap::from([(Role::Waiter, 1)]);
        let staff = vec![
            Employee::new(2, "B", Role::Barista).with_coffee(5.0),
            Employee::new(4, "W", Role::Waiter).with_customer_service(4.0),
        ];

        let schedule = CohortScheduler::new(Role::Waiter)
            .unwrap()
            .make_schedule(&weekday_shifts(), &staff, &cfg)
            .unwrap();
        assert!(schedule.assignments.iter().all(|a| a.employee_id == 4));
    }
}
