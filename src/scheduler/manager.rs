//! MANAGER role scheduler.
//!
//! Managers provide coverage every operating day and are the scarcest
//! cohort, so busy days are always scheduled first: locking in weekend
//! coverage keeps enough manager hours under the cap for the days where
//! headcount is elevated.

use super::{schedule_role_week, RoleSchedule, RoleScheduler};
use crate::error::CoverageError;
use crate::models::{Employee, Role, RosterConfig, Shift};

/// Scheduler for the MANAGER role.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagerScheduler;

impl RoleScheduler for ManagerScheduler {
    fn role(&self) -> Role {
        Role::Manager
    }

    fn make_schedule(
        &self,
        shifts: &[Shift],
        employees: &[Employee],
        cfg: &RosterConfig,
    ) -> Result<RoleSchedule, CoverageError> {
        schedule_role_week(Role::Manager, shifts, employees, cfg, true)
    }
}
