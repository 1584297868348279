//! Day-level assignment engine.
//!
//! Fills one day's slots for one role: candidate filtering under hard
//! constraints, scoring, greedy selection, single-step backtracking
//! repair on deadlock, and the busy-day fallback relaxation.
//!
//! # Algorithm
//!
//! Per slot: build the pool of role employees who are not yet assigned
//! today and whose projected hours stay within the role and global hard
//! caps; score each as `fitness − cohort penalty − deviation penalty`;
//! commit the maximum (ties to the lowest employee id). An empty pool
//! triggers the repair scan: already-committed assignments of this
//! day/role are tentatively undone most-recent-first and re-staffed with
//! an alternate, which frees capacity for the stuck slot. Greedy
//! selection is near-optimal for this low-conflict problem; the one-step
//! repair resolves the rare deadlocks greedy ordering creates without
//! paying for full search.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 2: Deterministic Models (list
//! scheduling with local repair).

mod ledger;

pub use ledger::WeeklyHoursLedger;

use std::collections::HashSet;

use log::{debug, warn};

use crate::error::CoverageError;
use crate::models::{
    Assignment, DayType, Employee, FallbackPolicy, Role, RosterConfig, Shift, ShiftType,
    TimeWindow,
};
use crate::planning::DayPlan;
use crate::scoring;

/// Slack for floating-point hour comparisons against caps.
const CAP_EPSILON: f64 = 1e-9;

/// One day's engine output for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOutcome {
    /// Committed assignments, slot order (fallback assignment last).
    pub assignments: Vec<Assignment>,
    /// `Some(min_required)` when the fallback policy accepted this day
    /// under-filled; coverage validation must then check against the
    /// floor instead of the exact requirement.
    pub relaxed: Option<u32>,
}

/// Fills day slots for a single role under hard constraints.
#[derive(Debug)]
pub struct AssignmentEngine<'a> {
    cfg: &'a RosterConfig,
}

impl<'a> AssignmentEngine<'a> {
    /// Creates an engine bound to one run's configuration.
    pub fn new(cfg: &'a RosterConfig) -> Self {
        Self { cfg }
    }

    /// Assigns `required` slots of `role` on `shift`'s date.
    ///
    /// `staff` is the role cohort; `ledger` and `assigned_today` are the
    /// run's mutable state for this role and date. Returns the day's
    /// assignments, or a [`CoverageError`] when a slot stays unfillable
    /// after backtracking repair and any applicable fallback.
    #[allow(clippy::too_many_arguments)]
    pub fn assign_day(
        &self,
        shift: &Shift,
        role: Role,
        required: u32,
        plan: &DayPlan,
        staff: &[Employee],
        ledger: &mut WeeklyHoursLedger,
        assigned_today: &mut HashSet<i64>,
    ) -> Result<DayOutcome, CoverageError> {
        let day_type = if self.cfg.is_busy_day(shift.date) {
            DayType::Busy
        } else {
            DayType::Weekday
        };

        let mut committed: Vec<Assignment> = Vec::new();
        let mut slot = 0usize;
        while slot < required as usize {
            let window = plan.window_for_slot(slot);

            if let Some(best) = self.select_candidate(role, window, staff, ledger, assigned_today, None)
            {
                committed.push(self.commit(
                    shift,
                    role,
                    best,
                    window,
                    plan.shift_type,
                    day_type,
                    ledger,
                    assigned_today,
                ));
                slot += 1;
                continue;
            }

            // Empty pool: try to unlock the slot by re-staffing an
            // earlier assignment of this day/role.
            if self.backtrack(role, window, &mut committed, staff, ledger, assigned_today) {
                continue;
            }

            if day_type == DayType::Busy {
                if let Some(fb) = self.cfg.fallback_for(role).copied() {
                    return self.apply_fallback(
                        shift,
                        role,
                        required,
                        fb,
                        day_type,
                        staff,
                        ledger,
                        assigned_today,
                        committed,
                    );
                }
            }

            self.log_candidate_analysis(shift, role, window, staff, ledger, assigned_today);
            return Err(CoverageError::new(
                shift.date,
                role,
                "insufficient eligible staff within hour caps",
            ));
        }

        Ok(DayOutcome {
            assignments: committed,
            relaxed: None,
        })
    }

    /// Best-scoring feasible candidate for a window, or `None` if the
    /// pool is empty. Ties break to the lowest employee id so identical
    /// inputs always reproduce the same roster.
    fn select_candidate(
        &self,
        role: Role,
        window: TimeWindow,
        staff: &[Employee],
        ledger: &WeeklyHoursLedger,
        assigned_today: &HashSet<i64>,
        exclude: Option<i64>,
    ) -> Option<i64> {
        let duration = window.duration_hours();
        let cohort = ledger.cohort_hours(staff);

        let mut best: Option<(f64, i64)> = None;
        for emp in staff {
            if emp.primary_role != role || Some(emp.id) == exclude {
                continue;
            }
            if assigned_today.contains(&emp.id) {
                continue;
            }
            if !self.within_caps(role, emp.id, window, ledger) {
                continue;
            }
            let current = ledger.hours_for(emp.id);
            let projected = current + duration;

            let score = scoring::candidate_score(emp, role, current, projected, &cohort, self.cfg);
            best = match best {
                None => Some((score, emp.id)),
                Some((best_score, best_id)) => {
                    if score > best_score || (score == best_score && emp.id < best_id) {
                        Some((score, emp.id))
                    } else {
                        Some((best_score, best_id))
                    }
                }
            };
        }
        best.map(|(_, id)| id)
    }

    #[allow(clippy::too_many_arguments)]
    fn commit(
        &self,
        shift: &Shift,
        role: Role,
        employee_id: i64,
        window: TimeWindow,
        shift_type: ShiftType,
        day_type: DayType,
        ledger: &mut WeeklyHoursLedger,
        assigned_today: &mut HashSet<i64>,
    ) -> Assignment {
        ledger.credit(employee_id, window.duration_hours());
        assigned_today.insert(employee_id);
        Assignment {
            shift_id: shift.id,
            employee_id,
            role,
            date: shift.date,
            start: window.start,
            end: window.end,
            shift_type,
            day_type,
        }
    }

    /// Single-step repair: scan this day/role's committed assignments
    /// most-recent-first, tentatively undo each, and look for an
    /// alternate who can take over the undone slot's original window.
    /// A swap only counts when the freed employee actually fits the
    /// stuck window, since that is what unlocks the slot; it bounds the
    /// repair to one swap per slot.
    ///
    /// Scope is deliberately same-role, same-day only.
    fn backtrack(
        &self,
        role: Role,
        stuck_window: TimeWindow,
        committed: &mut [Assignment],
        staff: &[Employee],
        ledger: &mut WeeklyHoursLedger,
        assigned_today: &mut HashSet<i64>,
    ) -> bool {
        for i in (0..committed.len()).rev() {
            let prev_employee = committed[i].employee_id;
            let prev_window = committed[i].window();
            let prev_hours = prev_window.duration_hours();

            // Tentatively undo.
            ledger.debit(prev_employee, prev_hours);
            assigned_today.remove(&prev_employee);

            let unlocks = self.within_caps(role, prev_employee, stuck_window, ledger);
            let alternate = if unlocks {
                self.select_candidate(
                    role,
                    prev_window,
                    staff,
                    ledger,
                    assigned_today,
                    Some(prev_employee),
                )
            } else {
                None
            };

            if let Some(alternate) = alternate {
                ledger.credit(alternate, prev_hours);
                assigned_today.insert(alternate);
                committed[i].employee_id = alternate;
                debug!(
                    "backtrack: re-staffed {} slot {}..{} on {} from employee {} to {}",
                    role, prev_window.start, prev_window.end, committed[i].date, prev_employee, alternate
                );
                return true;
            }

            // No unlocking swap here; restore and keep scanning.
            ledger.credit(prev_employee, prev_hours);
            assigned_today.insert(prev_employee);
        }
        false
    }

    /// Whether an employee's projected hours for a window stay within
    /// the role and global hard caps.
    fn within_caps(
        &self,
        role: Role,
        employee_id: i64,
        window: TimeWindow,
        ledger: &WeeklyHoursLedger,
    ) -> bool {
        let projected = ledger.hours_for(employee_id) + window.duration_hours();
        if projected > self.cfg.hard_cap_for(role) + CAP_EPSILON {
            return false;
        }
        match self.cfg.global_hard_cap {
            Some(global_cap) => projected <= global_cap + CAP_EPSILON,
            None => true,
        }
    }

    /// Busy-day relaxation: optionally place one extra assignment on the
    /// role's default (non-staggered) window, then accept the day if the
    /// filled count reaches the policy floor.
    #[allow(clippy::too_many_arguments)]
    fn apply_fallback(
        &self,
        shift: &Shift,
        role: Role,
        required: u32,
        fb: FallbackPolicy,
        day_type: DayType,
        staff: &[Employee],
        ledger: &mut WeeklyHoursLedger,
        assigned_today: &mut HashSet<i64>,
        mut committed: Vec<Assignment>,
    ) -> Result<DayOutcome, CoverageError> {
        if fb.allow_single_full_shift && (committed.len() as u32) < required {
            let window = self.cfg.default_window;
            if let Some(best) =
                self.select_candidate(role, window, staff, ledger, assigned_today, None)
            {
                committed.push(self.commit(
                    shift,
                    role,
                    best,
                    window,
                    ShiftType::WeekendFallbackSingle,
                    day_type,
                    ledger,
                    assigned_today,
                ));
            }
        }

        let filled = committed.len() as u32;
        if filled < fb.min_required {
            self.log_candidate_analysis(
                shift,
                role,
                self.cfg.default_window,
                staff,
                ledger,
                assigned_today,
            );
            return Err(CoverageError::new(
                shift.date,
                role,
                format!(
                    "only {filled} of {required} slots fillable even after weekend fallback (floor {})",
                    fb.min_required
                ),
            ));
        }

        let relaxed = if filled < required {
            warn!(
                "{} on {} accepted under-filled: {filled}/{required} (fallback floor {})",
                role, shift.date, fb.min_required
            );
            Some(fb.min_required)
        } else {
            None
        };

        Ok(DayOutcome {
            assignments: committed,
            relaxed,
        })
    }

    /// Explains why each staff member was excluded from an unfillable
    /// slot. Diagnostic only.
    fn log_candidate_analysis(
        &self,
        shift: &Shift,
        role: Role,
        window: TimeWindow,
        staff: &[Employee],
        ledger: &WeeklyHoursLedger,
        assigned_today: &HashSet<i64>,
    ) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let duration = window.duration_hours();
        let role_cap = self.cfg.hard_cap_for(role);
        debug!("candidate analysis for {} on {}:", role, shift.date);
        for emp in staff {
            let reason = if emp.primary_role != role {
                "role mismatch"
            } else if assigned_today.contains(&emp.id) {
                "already assigned today"
            } else if ledger.hours_for(emp.id) + duration > role_cap + CAP_EPSILON {
                "would exceed role hard cap"
            } else {
                "eligible (excluded elsewhere)"
            };
            debug!("  employee {}: {}", emp.id, reason);
        }
    }
}
