//! Time-window resolution per role, date, and slot.
//!
//! Regular days use a single window per role; busy days cycle through
//! staggered windows (`slot % pattern_count`) so coverage spreads across
//! the open hours. SANDWICH runs ahead of opening for prep, so its
//! defaults start early; everyone else defaults to the café operating
//! window.

use chrono::NaiveDate;

use crate::models::{Role, RosterConfig, ShiftType, TimeWindow};

/// Fixed early windows for SANDWICH when no patterns are configured.
fn sandwich_weekday_default() -> TimeWindow {
    TimeWindow::from_hm(5, 0, 12, 0)
}

fn sandwich_busy_defaults() -> [TimeWindow; 2] {
    [TimeWindow::from_hm(5, 0, 13, 30), TimeWindow::from_hm(6, 0, 13, 30)]
}

/// The window patterns for one (role, date) and the label they carry.
///
/// The returned list holds the base patterns only; callers pick a slot's
/// window with [`DayPlan::window_for_slot`], which cycles through them.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    /// Base window patterns, length ≥ 1.
    pub windows: Vec<TimeWindow>,
    /// Pattern label recorded on resulting assignments.
    pub shift_type: ShiftType,
}

impl DayPlan {
    /// Window for a slot index, cycling through the base patterns.
    pub fn window_for_slot(&self, slot: usize) -> TimeWindow {
        self.windows[slot % self.windows.len()]
    }
}

/// Resolves the window patterns for a role on a date.
pub fn plan_for_day(role: Role, date: NaiveDate, cfg: &RosterConfig) -> DayPlan {
    let busy = cfg.is_busy_day(date);
    let configured = cfg.role_windows.get(&role);

    match role {
        Role::Barista | Role::Waiter => {
            if busy {
                let staggered = configured.map(|w| w.busy.as_slice()).unwrap_or(&[]);
                let windows = if staggered.len() >= 2 {
                    staggered.to_vec()
                } else {
                    vec![cfg.default_window, cfg.default_window]
                };
                DayPlan {
                    windows,
                    shift_type: ShiftType::WeekendDouble,
                }
            } else {
                let window = configured
                    .and_then(|w| w.weekday)
                    .unwrap_or(cfg.default_window);
                DayPlan {
                    windows: vec![window],
                    shift_type: ShiftType::WeekdaySingle,
                }
            }
        }
        Role::Sandwich => {
            if busy {
                let staggered = configured.map(|w| w.busy.as_slice()).unwrap_or(&[]);
                let windows = if staggered.len() >= 2 {
                    staggered.to_vec()
                } else {
                    sandwich_busy_defaults().to_vec()
                };
                DayPlan {
                    windows,
                    shift_type: ShiftType::WeekendDouble,
                }
            } else {
                let window = configured
                    .and_then(|w| w.weekday)
                    .unwrap_or_else(sandwich_weekday_default);
                DayPlan {
                    windows: vec![window],
                    shift_type: ShiftType::WeekdaySingle,
                }
            }
        }
        Role::Manager => DayPlan {
            windows: vec![cfg.default_window],
            shift_type: if busy {
                ShiftType::WeekendSingle
            } else {
                ShiftType::WeekdaySingle
            },
        },
    }
}
