//! Current-step pointer for the wizard.

use super::{FieldIssue, StepValidator, WizardStep};
use crate::domain::decision::DecisionFormData;

/// Outcome of a forward move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the contained step.
    Moved(WizardStep),
    /// The current step's gate is closed; the pointer did not move.
    Blocked(Vec<FieldIssue>),
    /// Already on the last step; submission is the only way forward.
    AtEnd,
}

/// Tracks which step is showing and enforces the forward gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardNavigator {
    current: WizardStep,
}

impl WizardNavigator {
    pub fn new() -> Self {
        Self {
            current: WizardStep::first(),
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn is_at_review(&self) -> bool {
        self.current == WizardStep::Review
    }

    /// Moves forward if the current step's gate is open.
    pub fn next(&mut self, form: &DecisionFormData) -> Advance {
        let Some(target) = self.current.next() else {
            return Advance::AtEnd;
        };

        let issues = StepValidator::issues_for(self.current, form);
        if !issues.is_empty() {
            return Advance::Blocked(issues);
        }

        self.current = target;
        Advance::Moved(target)
    }

    /// Moves back one step; stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.current.previous() {
            self.current = previous;
        }
        self.current
    }

    /// Jumps straight to `step`. Editing earlier data is never blocked.
    pub fn jump_to(&mut self, step: WizardStep) -> WizardStep {
        self.current = step;
        self.current
    }
}

impl Default for WizardNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{Criterion, DecisionOption};

    fn complete_form() -> DecisionFormData {
        DecisionFormData::initial()
            .set_title("Pick a language")
            .replace_options(vec![DecisionOption::new("Go"), DecisionOption::new("Rust")])
            .replace_criteria(vec![Criterion::new("Speed")])
    }

    #[test]
    fn starts_on_context() {
        assert_eq!(WizardNavigator::new().current(), WizardStep::Context);
    }

    #[test]
    fn next_walks_all_steps_for_complete_form() {
        let form = complete_form();
        let mut nav = WizardNavigator::new();
        for expected in &WizardStep::ALL[1..] {
            assert_eq!(nav.next(&form), Advance::Moved(*expected));
        }
        assert!(nav.is_at_review());
        assert_eq!(nav.next(&form), Advance::AtEnd);
        assert_eq!(nav.current(), WizardStep::Review);
    }

    #[test]
    fn blocked_next_leaves_step_unchanged() {
        let form = DecisionFormData::initial().set_title("ab");
        let mut nav = WizardNavigator::new();
        assert!(matches!(nav.next(&form), Advance::Blocked(issues) if issues[0].field == "title"));
        assert!(matches!(nav.next(&form), Advance::Blocked(_)));
        assert_eq!(nav.current(), WizardStep::Context);
    }

    #[test]
    fn back_is_unconditional_and_stops_at_first() {
        let mut nav = WizardNavigator::new();
        nav.jump_to(WizardStep::Criteria);
        assert_eq!(nav.back(), WizardStep::Options);
        assert_eq!(nav.back(), WizardStep::Context);
        assert_eq!(nav.back(), WizardStep::Context);
    }

    #[test]
    fn jump_to_ignores_gates() {
        let mut nav = WizardNavigator::new();
        assert_eq!(nav.jump_to(WizardStep::Review), WizardStep::Review);
        assert_eq!(nav.jump_to(WizardStep::Options), WizardStep::Options);
    }
}
