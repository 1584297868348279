//! Roster domain models.
//!
//! Core data types for describing staff, shifts, configuration, and the
//! assignment output. Models carry no scheduling logic beyond cheap
//! derived queries; resolution and assignment live in [`crate::planning`]
//! and [`crate::engine`].

mod assignment;
mod config;
mod employee;
mod roster;
mod shift;
mod time_window;

pub use assignment::{Assignment, DayType, ShiftType};
pub use config::{
    DeviationRates, FallbackPolicy, HourPolicy, RoleWindows, RosterConfig, ScoreWeights,
};
pub use employee::{Employee, Role, SkillSet};
pub use roster::Roster;
pub use shift::Shift;
pub use time_window::TimeWindow;
