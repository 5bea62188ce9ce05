//! Row value objects collected by the wizard: options, criteria, constraints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{new_row_id, ValidationError};

/// One alternative under consideration.
///
/// `label` may be blank while the user is still typing; blank rows simply
/// do not count toward the options gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DecisionOption {
    /// Creates an option with a fresh id.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: new_row_id(),
            label: label.into(),
            notes: None,
        }
    }

    /// Creates an empty row as added by the "Add option" affordance.
    pub fn blank() -> Self {
        Self::new("")
    }

    /// Builder: attach notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True if the trimmed label is non-empty.
    pub fn is_filled(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

/// Criterion importance on a 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a weight, rejecting values outside 1..=10.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "weight",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Human label shown next to the weight slider.
    pub fn label(&self) -> &'static str {
        match self.0 {
            0..=2 => "Low",
            3..=4 => "Medium-Low",
            5..=6 => "Medium",
            7..=8 => "High",
            _ => "Critical",
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for Weight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weighted factor used to evaluate options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub weight: Weight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Criterion {
    /// Creates a criterion with a fresh id and the default weight.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_row_id(),
            name: name.into(),
            weight: Weight::default(),
            description: None,
        }
    }

    pub fn blank() -> Self {
        Self::new("")
    }

    /// Builder: set the weight.
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Builder: attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True if the trimmed name is non-empty.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Category of a stated limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintKind {
    #[default]
    Budget,
    Timeline,
    Risk,
    Other,
}

impl ConstraintKind {
    /// Label used in the constraint type picker.
    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::Budget => "Budget",
            ConstraintKind::Timeline => "Timeline",
            ConstraintKind::Risk => "Risk Tolerance",
            ConstraintKind::Other => "Other",
        }
    }
}

/// Constraint priority on a 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a priority, rejecting values outside 1..=5.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "priority",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Priority {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

/// A stated limitation considered during analysis but not scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ConstraintKind,
    pub value: String,
    #[serde(default)]
    pub priority: Priority,
}

impl Constraint {
    /// Creates a constraint with a fresh id and default priority.
    pub fn new(kind: ConstraintKind, value: impl Into<String>) -> Self {
        Self {
            id: new_row_id(),
            kind,
            value: value.into(),
            priority: Priority::default(),
        }
    }

    /// Row added by the "Add constraint" affordance: budget, empty, priority 3.
    pub fn blank() -> Self {
        Self::new(ConstraintKind::default(), "")
    }

    /// Builder: set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
