//! SANDWICH role scheduler.
//!
//! Prep staff start before the café opens (05:00 by default) so
//! sandwiches are ready for the morning trade; busy days stretch the
//! window past noon. Window details live in the timeplan; this
//! scheduler only binds the role.

use super::{schedule_role_week, RoleSchedule, RoleScheduler};
use crate::error::CoverageError;
use crate::models::{Employee, Role, RosterConfig, Shift};

/// Scheduler for the SANDWICH role.
#[derive(Debug, Clone, Copy, Default)]
pub struct SandwichScheduler;

impl RoleScheduler for SandwichScheduler {
    fn role(&self) -> Role {
        Role::Sandwich
    }

    fn make_schedule(
        &self,
        shifts: &[Shift],
        employees: &[Employee],
        cfg: &RosterConfig,
    ) -> Result<RoleSchedule, CoverageError> {
        schedule_role_week(Role::Sandwich, shifts, employees, cfg, cfg.schedule_busy_days_first)
    }
}
