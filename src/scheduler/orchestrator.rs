//! Orchestrator: a complete week across all roles.
//!
//! Runs the role schedulers in a configurable order (scarce,
//! early-constrained roles first so later cohorts trigger less
//! backtracking), merges their output, and hands the merged roster to
//! the validator. The result is all-or-nothing: any coverage or
//! validation failure aborts the whole run and no partial roster is
//! returned.

use std::collections::BTreeMap;

use log::info;

use super::{CohortScheduler, ManagerScheduler, RoleScheduler, SandwichScheduler};
use crate::error::{ConstraintViolationError, RosterError};
use crate::models::{Employee, Role, Roster, RosterConfig, Shift};
use crate::validation::validate_roster;

/// Coordinates the role schedulers for one week.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    /// Overrides the config's scheduler order when set.
    order: Option<Vec<Role>>,
}

impl Orchestrator {
    /// Creates an orchestrator using the config's scheduler order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an orchestrator with an explicit scheduler order.
    pub fn with_order(order: Vec<Role>) -> Self {
        Self { order: Some(order) }
    }

    /// Builds and validates the complete week.
    ///
    /// Validates the config up front, runs each role scheduler,
    /// concatenates their assignments, then re-checks every hard
    /// invariant over the merged set.
    pub fn build_roster(
        &self,
        shifts: &[Shift],
        employees: &[Employee],
        cfg: &RosterConfig,
    ) -> Result<Roster, RosterError> {
        cfg.validate()?;

        let order = self
            .order
            .clone()
            .unwrap_or_else(|| cfg.scheduler_order.clone());
        info!("building roster for {} shift(s), order {:?}", shifts.len(), order);

        let mut roster = Roster::new();
        let mut relaxed = BTreeMap::new();
        for &role in &order {
            let scheduler: Box<dyn RoleScheduler> = match role {
                Role::Manager => Box::new(ManagerScheduler),
                Role::Sandwich => Box::new(SandwichScheduler),
                Role::Barista | Role::Waiter => Box::new(CohortScheduler::new(role)?),
            };
            let schedule = scheduler.make_schedule(shifts, employees, cfg)?;
            info!("{role} scheduler completed: {} assignments", schedule.assignments.len());
            relaxed.extend(schedule.relaxed);
            roster.extend(schedule.assignments);
        }

        validate_roster(&roster, employees, shifts, &relaxed, cfg)
            .map_err(|violations| RosterError::Validation(ConstraintViolationError::new(violations)))?;

        info!("roster complete: {} assignments", roster.len());
        Ok(roster)
    }
}

/// Builds a validated week roster with the config's scheduler order.
pub fn build_week_roster(
    shifts: &[Shift],
    employees: &[Employee],
    cfg: &RosterConfig,
) -> Result<Roster, RosterError> {
    Orchestrator::new().build_roster(shifts, employees, cfg)
}
