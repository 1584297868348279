//! Error types for roster generation.
//!
//! Three failure classes, kept distinct because they mean different things
//! to a caller: `ConfigError` (bad policy, caught before the engine runs),
//! `CoverageError` (a day/role cannot be staffed within hard constraints),
//! and `ConstraintViolationError` (a generated roster failed the
//! independent validation pass). `RosterError` is the umbrella returned at
//! the orchestrator boundary.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::Role;
use crate::validation::ConstraintViolation;

/// Malformed or inconsistent policy in a [`RosterConfig`](crate::models::RosterConfig).
///
/// Detected by `RosterConfig::validate` before any scheduling runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `target_min` exceeds `target_max` in an hour policy.
    #[error("hour policy for {role}: target_min {min} exceeds target_max {max}")]
    TargetBandInverted { role: Role, min: f64, max: f64 },

    /// An hour cap is zero or negative.
    #[error("hour policy for {role}: hard cap {cap} must be positive")]
    NonPositiveHardCap { role: Role, cap: f64 },

    /// A time window ends at or before its start.
    #[error("time window for {role} is empty or inverted: {start}..{end}")]
    EmptyWindow {
        role: Role,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// The café operating window ends at or before it opens.
    #[error("operating window is empty or inverted: {start}..{end}")]
    EmptyOperatingWindow { start: NaiveTime, end: NaiveTime },

    /// A weekend-fallback policy demands a floor of zero staff.
    #[error("weekend fallback for {role}: min_required must be at least 1")]
    ZeroFallbackFloor { role: Role },

    /// A cohort scheduler was constructed for a non-cohort role.
    #[error("cohort scheduler handles BARISTA and WAITER only, not {0}")]
    UnsupportedCohortRole(Role),
}

/// A (date, role) slot could not be filled within hard constraints,
/// after backtracking repair and any applicable weekend fallback.
///
/// Fatal for the run; the engine never retries internally.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("coverage impossible on {date} for role {role}: {reason}")]
pub struct CoverageError {
    /// Day that could not be covered.
    pub date: NaiveDate,
    /// Role whose slot stayed empty.
    pub role: Role,
    /// What ruled every candidate out.
    pub reason: String,
}

impl CoverageError {
    pub fn new(date: NaiveDate, role: Role, reason: impl Into<String>) -> Self {
        Self {
            date,
            role,
            reason: reason.into(),
        }
    }
}

/// A generated roster failed the independent validation pass.
///
/// Always indicates a generation-logic defect or inconsistent input data;
/// never downgraded to a warning.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "roster violates {} hard constraint(s); first: {}",
    .violations.len(),
    .violations.first().map(|v| v.message.as_str()).unwrap_or("none")
)]
pub struct ConstraintViolationError {
    /// Every violation found, in validator check order.
    pub violations: Vec<ConstraintViolation>,
}

impl ConstraintViolationError {
    pub fn new(violations: Vec<ConstraintViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }
}

/// Any failure surfacing at the orchestrator boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Coverage(#[from] CoverageError),
    #[error(transparent)]
    Validation(#[from] ConstraintViolationError),
}
