//! Per-day resolution of requirements and time windows.
//!
//! Pure functions of (date, config). The engine and schedulers call
//! these; the validator recomputes requirements through the same path so
//! its coverage check stays independent of engine state.

pub mod requirements;
pub mod timeplan;

pub use requirements::requirements_for_day;
pub use timeplan::{plan_for_day, DayPlan};
