//! Employee model.
//!
//! An employee has a stable identity, exactly one primary role, and an
//! optional skill profile. Identity is immutable; skills may be refreshed
//! from historical averages before a run (see [`crate::skills`]). The
//! engine only ever reads employees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Staff role. An employee is only ever assigned to their primary role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Manager,
    Barista,
    Waiter,
    Sandwich,
}

impl Role {
    /// All roles, in the default scheduling order (scarce roles first).
    pub const ALL: [Role; 4] = [Role::Manager, Role::Sandwich, Role::Barista, Role::Waiter];

    /// Uppercase label, matching the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "MANAGER",
            Role::Barista => "BARISTA",
            Role::Waiter => "WAITER",
            Role::Sandwich => "SANDWICH",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill profile on a 0–10 scale. `None` means unrated and scores as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    /// Espresso/coffee preparation.
    pub coffee: Option<f64>,
    /// Sandwich preparation.
    pub sandwich: Option<f64>,
    /// Working speed.
    pub speed: Option<f64>,
    /// Customer service rating.
    pub customer_service: Option<f64>,
}

impl SkillSet {
    pub fn coffee(&self) -> f64 {
        self.coffee.unwrap_or(0.0)
    }

    pub fn sandwich(&self) -> f64 {
        self.sandwich.unwrap_or(0.0)
    }

    pub fn speed(&self) -> f64 {
        self.speed.unwrap_or(0.0)
    }

    pub fn customer_service(&self) -> f64 {
        self.customer_service.unwrap_or(0.0)
    }
}

/// A staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable unique identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// The only role this employee may be assigned to.
    pub primary_role: Role,
    /// Skill profile; unrated skills contribute 0 to fitness.
    pub skills: SkillSet,
}

impl Employee {
    /// Creates an employee with an empty skill profile.
    pub fn new(id: i64, name: impl Into<String>, primary_role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            primary_role,
            skills: SkillSet::default(),
        }
    }

    /// Sets the coffee skill.
    pub fn with_coffee(mut self, level: f64) -> Self {
        self.skills.coffee = Some(level);
        self
    }

    /// Sets the sandwich skill.
    pub fn with_sandwich(mut self, level: f64) -> Self {
        self.skills.sandwich = Some(level);
        self
    }

    /// Sets the speed skill.
    pub fn with_speed(mut self, level: f64) -> Self {
        self.skills.speed = Some(level);
        self
    }

    /// Sets the customer service rating.
    pub fn with_customer_service(mut self, level: f64) -> Self {
        self.skills.customer_service = Some(level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let emp = Employee::new(2, "Bella Tran", Role::Barista)
            .with_coffee(5.0)
            .with_speed(4.0)
            .with_customer_service(3.0);

        assert_eq!(emp.id, 2);
        assert_eq!(emp.primary_role, Role::Barista);
        assert_eq!(emp.skills.coffee(), 5.0);
        assert_eq!(emp.skills.sandwich(), 0.0); // unrated → 0
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Manager.to_string(), "MANAGER");
        assert_eq!(Role::Sandwich.as_str(), "SANDWICH");
    }

    #[test]
    fn test_role_serde_label() {
        let json = serde_json::to_string(&Role::Barista).unwrap();
        assert_eq!(json, "\"BARISTA\"");
        let back: Role = serde_json::from_str("\"WAITER\"").unwrap();
        assert_eq!(back, Role::Waiter);
    }
}
