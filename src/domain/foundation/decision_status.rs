//! DecisionStatus enum for tracking the lifecycle of a persisted decision.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a decision record.
///
/// Valid transitions:
/// - Draft -> Analyzing, Archived
/// - Analyzing -> Done, Draft (revert after a failed run)
/// - Done -> Analyzing (re-analysis), Archived
/// - Archived is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    Draft,
    Analyzing,
    Done,
    Archived,
}

impl DecisionStatus {
    /// All statuses in dashboard display order.
    pub const ALL: [DecisionStatus; 4] = [
        DecisionStatus::Draft,
        DecisionStatus::Analyzing,
        DecisionStatus::Done,
        DecisionStatus::Archived,
    ];

    /// Returns true if results can be shown for this decision.
    pub fn has_results(&self) -> bool {
        matches!(self, DecisionStatus::Done)
    }

    /// Wire name used by the persistence layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Draft => "draft",
            DecisionStatus::Analyzing => "analyzing",
            DecisionStatus::Done => "done",
            DecisionStatus::Archived => "archived",
        }
    }
}

impl StateMachine for DecisionStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use DecisionStatus::*;
        match self {
            Draft => vec![Analyzing, Archived],
            Analyzing => vec![Done, Draft],
            Done => vec![Analyzing, Archived],
            Archived => vec![],
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStatus::Draft => "Draft",
            DecisionStatus::Analyzing => "Analyzing",
            DecisionStatus::Done => "Complete",
            DecisionStatus::Archived => "Archived",
        };
        write!(f, "{}", s)
    }
}
