//! Daily headcount resolution.
//!
//! Requirements are layered: configured defaults, then the busy-day
//! overlay when the date's weekday is busy, then any date-specific
//! override. Each layer fully replaces a role's count (layers never
//! merge fields of the same role), and an override may introduce roles
//! absent from the defaults.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Role, RosterConfig};

/// Resolves the required headcount per role for one date.
pub fn requirements_for_day(date: NaiveDate, cfg: &RosterConfig) -> BTreeMap<Role, u32> {
    let mut req = cfg.default_requirements.clone();

    if cfg.is_busy_day(date) {
        for (&role, &count) in &cfg.busy_day_requirements {
            req.insert(role, count);
        }
    }

    if let Some(overrides) = cfg.overrides.get(&date) {
        for (&role, &count) in overrides {
            req.insert(role, count);
        }
    }

    req
}
