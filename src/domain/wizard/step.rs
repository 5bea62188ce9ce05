//! Wizard step identifiers in their fixed order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen of the decision wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Context,
    Options,
    Criteria,
    Constraints,
    Review,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Context,
        WizardStep::Options,
        WizardStep::Criteria,
        WizardStep::Constraints,
        WizardStep::Review,
    ];

    pub fn first() -> Self {
        WizardStep::Context
    }

    pub fn last() -> Self {
        WizardStep::Review
    }

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Context => 1,
            WizardStep::Options => 2,
            WizardStep::Criteria => 3,
            WizardStep::Constraints => 4,
            WizardStep::Review => 5,
        }
    }

    /// Step reached by moving forward, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Context => Some(WizardStep::Options),
            WizardStep::Options => Some(WizardStep::Criteria),
            WizardStep::Criteria => Some(WizardStep::Constraints),
            WizardStep::Constraints => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// Step reached by moving back, if any.
    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Context => None,
            WizardStep::Options => Some(WizardStep::Context),
            WizardStep::Criteria => Some(WizardStep::Options),
            WizardStep::Constraints => Some(WizardStep::Criteria),
            WizardStep::Review => Some(WizardStep::Constraints),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Context => "Context",
            WizardStep::Options => "Options",
            WizardStep::Criteria => "Criteria",
            WizardStep::Constraints => "Constraints",
            WizardStep::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Context => "What are you deciding?",
            WizardStep::Options => "What are your choices?",
            WizardStep::Criteria => "What matters most?",
            WizardStep::Constraints => "Any limitations?",
            WizardStep::Review => "Ready to analyze",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_walk_the_fixed_order() {
        let mut step = WizardStep::first();
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
            seen.push(step);
        }
        assert_eq!(seen, WizardStep::ALL.to_vec());
        assert_eq!(step, WizardStep::last());
    }

    #[test]
    fn ends_have_no_neighbours() {
        assert_eq!(WizardStep::Context.previous(), None);
        assert_eq!(WizardStep::Review.next(), None);
    }

    #[test]
    fn numbers_are_one_based() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn constraints_step_describes_limitations() {
        assert_eq!(WizardStep::Constraints.description(), "Any limitations?");
    }
}
