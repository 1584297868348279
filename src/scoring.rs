//! Candidate scoring: skill fitness minus fairness penalties.
//!
//! All functions are pure and deterministic. The composite score is
//! `fitness − cohort_penalty − deviation_penalty`; higher is better.
//! Hard-cap feasibility is not scored here; the engine excludes
//! over-cap candidates from the pool before scoring.

use std::collections::BTreeMap;

use crate::models::{Employee, Role, RosterConfig, ScoreWeights};

/// Skill-based fitness of an employee for a role.
///
/// MANAGER scores a constant weight (managers are interchangeable for
/// coverage); the other roles score a weighted sum of the relevant
/// skills. Unrated skills contribute 0.
pub fn role_fitness(emp: &Employee, role: Role, w: &ScoreWeights) -> f64 {
    match role {
        Role::Manager => w.manager_weight,
        Role::Barista => {
            w.coffee * emp.skills.coffee()
                + w.speed * emp.skills.speed()
                + w.customer_service * emp.skills.customer_service()
        }
        Role::Waiter => {
            w.customer_service * emp.skills.customer_service() + w.speed * emp.skills.speed()
        }
        Role::Sandwich => w.sandwich * emp.skills.sandwich(),
    }
}

/// Rotation penalty within a role cohort.
///
/// Only employees above the cohort's current minimum are penalized,
/// proportionally to the excess, which biases selection toward whoever
/// has the fewest hours so far.
pub fn cohort_penalty(current_hours: f64, cohort_hours: &BTreeMap<i64, f64>, fairness_factor: f64) -> f64 {
    let Some(min_hours) = cohort_hours.values().copied().reduce(f64::min) else {
        return 0.0;
    };
    (current_hours - min_hours).max(0.0) * fairness_factor
}

/// Penalty for a projected weekly total leaving the role's target band.
///
/// Pulls from both sides: hours below `target_min` and hours above
/// `target_max` are penalized at their configured per-hour rates. Roles
/// without an hour policy are never penalized.
pub fn deviation_penalty(projected_hours: f64, role: Role, cfg: &RosterConfig) -> f64 {
    let Some(policy) = cfg.policy_for(role) else {
        return 0.0;
    };
    let below = (policy.target_min - projected_hours).max(0.0);
    let above = (projected_hours - policy.target_max).max(0.0);
    below * cfg.deviation_rates.per_hour_below_target
        + above * cfg.deviation_rates.per_hour_above_target
}

/// Composite score for assigning `emp` to a slot.
///
/// `current_hours` is the employee's committed weekly total at decision
/// time (the cohort penalty baseline); `projected_hours` includes the
/// slot under consideration (the deviation baseline).
pub fn candidate_score(
    emp: &Employee,
    role: Role,
    current_hours: f64,
    projected_hours: f64,
    cohort_hours: &BTreeMap<i64, f64>,
    cfg: &RosterConfig,
) -> f64 {
    role_fitness(emp, role, &cfg.weights)
        - cohort_penalty(current_hours, cohort_hours, cfg.weights.fairness_factor)
        - deviation_penalty(projected_hours, role, cfg)
}
