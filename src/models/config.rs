//! Run configuration.
//!
//! Immutable per run. Parsing and file-format validation happen in an
//! external collaborator; the engine receives this structure already
//! populated. `validate` re-checks internal consistency (the checks a
//! hand-built config can still get wrong) and is called once at the
//! orchestrator boundary before any scheduling.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{Role, TimeWindow};
use crate::error::ConfigError;

/// Preferred weekly hour band and absolute cap for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourPolicy {
    /// Lower edge of the preferred weekly band.
    pub target_min: f64,
    /// Upper edge of the preferred weekly band.
    pub target_max: f64,
    /// Absolute weekly maximum. Never exceeded.
    pub hard_cap: f64,
}

/// Scoring weights for fitness and fairness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Constant fitness for the MANAGER role.
    pub manager_weight: f64,
    /// Weight on the coffee skill (BARISTA).
    pub coffee: f64,
    /// Weight on the sandwich skill (SANDWICH).
    pub sandwich: f64,
    /// Weight on the speed skill (BARISTA, WAITER).
    pub speed: f64,
    /// Weight on the customer service rating (BARISTA, WAITER).
    pub customer_service: f64,
    /// Per-hour penalty for sitting above the cohort's minimum hours.
    pub fairness_factor: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            manager_weight: 1.0,
            coffee: 1.0,
            sandwich: 1.0,
            speed: 0.5,
            customer_service: 0.5,
            fairness_factor: 0.25,
        }
    }
}

/// Per-hour penalty rates for leaving a role's target band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationRates {
    /// Penalty per hour short of `target_min`.
    pub per_hour_below_target: f64,
    /// Penalty per hour past `target_max`.
    pub per_hour_above_target: f64,
}

impl Default for DeviationRates {
    fn default() -> Self {
        Self {
            per_hour_below_target: 0.5,
            per_hour_above_target: 0.75,
        }
    }
}

/// Configured time-window patterns for one role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleWindows {
    /// Single window used on regular days. `None` = role default.
    pub weekday: Option<TimeWindow>,
    /// Staggered windows cycled through on busy days. Fewer than two
    /// entries means the role falls back to duplicated defaults.
    pub busy: Vec<TimeWindow>,
}

/// Relaxation policy for unfillable busy-day slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackPolicy {
    /// Whether the relaxation applies at all.
    pub enabled: bool,
    /// Accepted coverage floor once relaxed.
    pub min_required: u32,
    /// Whether to try one extra assignment on the role's default window
    /// before settling for under-coverage.
    pub allow_single_full_shift: bool,
}

/// Immutable configuration for one roster run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Café operating window; also the default shift window.
    pub default_window: TimeWindow,
    /// Baseline headcount per role for every day.
    pub default_requirements: BTreeMap<Role, u32>,
    /// Busy-day overlay; each entry fully replaces that role's count.
    pub busy_day_requirements: BTreeMap<Role, u32>,
    /// Date-specific overrides; each entry fully replaces that role's
    /// count and may introduce roles absent from the defaults.
    pub overrides: BTreeMap<NaiveDate, BTreeMap<Role, u32>>,
    /// Weekdays with elevated/staggered staffing.
    pub busy_days: Vec<Weekday>,
    /// Configured window patterns per role.
    pub role_windows: BTreeMap<Role, RoleWindows>,
    /// Preferred hour band and cap per role.
    pub hour_policy: BTreeMap<Role, HourPolicy>,
    /// Weekly cap applied when a role has no `hour_policy` entry.
    pub default_hard_cap: f64,
    /// Optional cap applied to every employee regardless of role.
    pub global_hard_cap: Option<f64>,
    /// Fitness and fairness weights.
    pub weights: ScoreWeights,
    /// Target-band deviation penalty rates.
    pub deviation_rates: DeviationRates,
    /// Busy-day relaxation policy per role.
    pub weekend_fallback: BTreeMap<Role, FallbackPolicy>,
    /// Whether non-manager schedulers visit busy days before regular days.
    pub schedule_busy_days_first: bool,
    /// Role scheduler execution order.
    pub scheduler_order: Vec<Role>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let default_requirements = BTreeMap::from([
            (Role::Manager, 1),
            (Role::Barista, 2),
            (Role::Waiter, 1),
            (Role::Sandwich, 1),
        ]);
        Self {
            default_window: TimeWindow::from_hm(7, 0, 15, 0),
            default_requirements,
            busy_day_requirements: BTreeMap::new(),
            overrides: BTreeMap::new(),
            busy_days: vec![Weekday::Sat, Weekday::Sun],
            role_windows: BTreeMap::new(),
            hour_policy: BTreeMap::new(),
            default_hard_cap: 40.0,
            global_hard_cap: None,
            weights: ScoreWeights::default(),
            deviation_rates: DeviationRates::default(),
            weekend_fallback: BTreeMap::new(),
            schedule_busy_days_first: false,
            scheduler_order: Role::ALL.to_vec(),
        }
    }
}

impl RosterConfig {
    /// Whether a date falls on a configured busy weekday.
    pub fn is_busy_day(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        self.busy_days.contains(&date.weekday())
    }

    /// Hour policy for a role, if one is configured.
    pub fn policy_for(&self, role: Role) -> Option<&HourPolicy> {
        self.hour_policy.get(&role)
    }

    /// Absolute weekly cap applying to a role.
    pub fn hard_cap_for(&self, role: Role) -> f64 {
        self.policy_for(role)
            .map(|p| p.hard_cap)
            .unwrap_or(self.default_hard_cap)
    }

    /// Fallback policy for a role, if enabled.
    pub fn fallback_for(&self, role: Role) -> Option<&FallbackPolicy> {
        self.weekend_fallback.get(&role).filter(|fb| fb.enabled)
    }

    /// Checks internal consistency.
    ///
    /// Covers what an upstream schema check cannot: inverted target
    /// bands, non-positive caps, empty windows, zero fallback floors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_window.end <= self.default_window.start {
            return Err(ConfigError::EmptyOperatingWindow {
                start: self.default_window.start,
                end: self.default_window.end,
            });
        }
        for (&role, policy) in &self.hour_policy {
            if policy.target_min > policy.target_max {
                return Err(ConfigError::TargetBandInverted {
                    role,
                    min: policy.target_min,
                    max: policy.target_max,
                });
            }
            if policy.hard_cap <= 0.0 {
                return Err(ConfigError::NonPositiveHardCap {
                    role,
                    cap: policy.hard_cap,
                });
            }
        }
        for (&role, windows) in &self.role_windows {
            let all = windows.weekday.iter().chain(windows.busy.iter());
            for w in all {
                if w.end <= w.start {
                    return Err(ConfigError::EmptyWindow {
                        role,
                        start: w.start,
                        end: w.end,
                    });
                }
            }
        }
        for (&role, fb) in &self.weekend_fallback {
            if fb.enabled && fb.min_required == 0 {
                return Err(ConfigError::ZeroFallbackFloor { role });
            }
        }
        Ok(())
    }
}
