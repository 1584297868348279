//! Skill refresh utilities.
//!
//! Employees arrive with baseline skill ratings; an external loader can
//! supply per-employee historical averages to refresh them before a run.
//! The jitter helper fabricates plausible rating drift for test and demo
//! datasets. It takes an explicit seed and is never used on the
//! scheduling path, which stays fully deterministic.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Rating scale bounds.
const SKILL_MIN: f64 = 0.0;
const SKILL_MAX: f64 = 10.0;

/// Averaged historical skill ratings for one employee.
///
/// `None` means no history for that skill; the employee's existing
/// rating is left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillAverages {
    pub coffee: Option<f64>,
    pub sandwich: Option<f64>,
    pub speed: Option<f64>,
    pub customer_service: Option<f64>,
}

/// Applies historical averages onto employee skill profiles in place.
///
/// Only skills with history are overwritten; employees absent from the
/// map keep their baseline ratings.
pub fn apply_skill_averages(employees: &mut [Employee], averages: &HashMap<i64, SkillAverages>) {
    for emp in employees {
        let Some(avg) = averages.get(&emp.id) else {
            continue;
        };
        if let Some(v) = avg.coffee {
            emp.skills.coffee = Some(v);
        }
        if let Some(v) = avg.sandwich {
            emp.skills.sandwich = Some(v);
        }
        if let Some(v) = avg.speed {
            emp.skills.speed = Some(v);
        }
        if let Some(v) = avg.customer_service {
            emp.skills.customer_service = Some(v);
        }
    }
}

/// Applies bounded random drift to every rated skill, clamped to the
/// rating scale. Same seed, same staff → same result.
pub fn vary_skills(employees: &mut [Employee], seed: u64, max_delta: f64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for emp in employees {
        for skill in [
            &mut emp.skills.coffee,
            &mut emp.skills.sandwich,
            &mut emp.skills.speed,
            &mut emp.skills.customer_service,
        ] {
            if let Some(value) = skill {
                let delta = rng.random_range(-max_delta..=max_delta);
                *value = (*value + delta).clamp(SKILL_MIN, SKILL_MAX);
            }
        }
    }
}
