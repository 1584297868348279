//! Weekly staff rostering for a café.
//!
//! Builds a week's roster by assigning employees to role-slots on
//! specific dates: every day's headcount per role is met, nobody is
//! double-booked or pushed past their hour cap, and selection favors
//! skill fit and a fair hour distribution within each role cohort.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `Shift`, `Assignment`,
//!   `Roster`, `RosterConfig`, `TimeWindow`
//! - **`planning`**: Per-day requirement and time-window resolution
//! - **`scoring`**: Skill fitness and fairness penalties
//! - **`engine`**: Greedy day assignment with backtracking repair and
//!   busy-day fallback
//! - **`scheduler`**: Per-role week schedulers, orchestration, statistics
//! - **`validation`**: Independent hard-invariant re-check of a roster
//! - **`skills`**: Historical skill refresh and seeded variation
//!
//! # Example
//!
//! ```
//! use cafe_roster::models::{Employee, Role, Shift, RosterConfig};
//! use cafe_roster::scheduler::build_week_roster;
//! use chrono::NaiveDate;
//!
//! let employees = vec![
//!     Employee::new(1, "Max", Role::Manager),
//!     Employee::new(2, "Bella", Role::Barista).with_coffee(5.0).with_speed(4.0),
//!     Employee::new(3, "Ben", Role::Barista).with_coffee(4.0).with_speed(3.0),
//!     Employee::new(4, "Wendy", Role::Waiter).with_customer_service(5.0),
//!     Employee::new(5, "Sam", Role::Sandwich).with_sandwich(5.0),
//! ];
//! let shifts: Vec<Shift> = (0..5)
//!     .map(|i| Shift::new(i + 1, NaiveDate::from_ymd_opt(2025, 9, 1 + i as u32).unwrap(), "2025-W36"))
//!     .collect();
//!
//! let roster = build_week_roster(&shifts, &employees, &RosterConfig::default()).unwrap();
//! assert_eq!(roster.len(), 25); // 5 staff slots × 5 weekdays
//! ```
//!
//! # Determinism
//!
//! Generation is single-threaded and free of randomness; identical
//! employees, shifts, and config always produce the identical roster.
//! Ties between equally scored candidates break to the lowest employee
//! id.

pub mod engine;
pub mod error;
pub mod models;
pub mod planning;
pub mod scheduler;
pub mod scoring;
pub mod skills;
pub mod validation;
