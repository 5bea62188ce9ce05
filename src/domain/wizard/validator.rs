//! Step gates deciding whether the wizard may advance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WizardStep;
use crate::domain::decision::DecisionFormData;

/// Minimum trimmed title length.
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum number of options with a non-blank label.
pub const MIN_FILLED_OPTIONS: usize = 2;

/// Minimum number of criteria with a non-blank name.
pub const MIN_FILLED_CRITERIA: usize = 1;

/// One unmet condition found by full-form validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub step: WizardStep,
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(step: WizardStep, field: &str, message: impl Into<String>) -> Self {
        Self {
            step,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Pure per-step validation.
pub struct StepValidator;

impl StepValidator {
    /// Returns true if the wizard may leave `step` going forward.
    pub fn can_advance(step: WizardStep, form: &DecisionFormData) -> bool {
        Self::issues_for(step, form).is_empty()
    }

    /// Unmet conditions for a single step. Empty means the gate is open.
    pub fn issues_for(step: WizardStep, form: &DecisionFormData) -> Vec<FieldIssue> {
        match step {
            WizardStep::Context => {
                if form.title.trim().chars().count() >= MIN_TITLE_LEN {
                    vec![]
                } else {
                    vec![FieldIssue::new(
                        step,
                        "title",
                        format!("Title must be at least {} characters", MIN_TITLE_LEN),
                    )]
                }
            }
            WizardStep::Options => {
                if form.filled_options().count() >= MIN_FILLED_OPTIONS {
                    vec![]
                } else {
                    vec![FieldIssue::new(
                        step,
                        "options",
                        format!("Add at least {} options", MIN_FILLED_OPTIONS),
                    )]
                }
            }
            WizardStep::Criteria => {
                if form.filled_criteria().count() >= MIN_FILLED_CRITERIA {
                    vec![]
                } else {
                    vec![FieldIssue::new(
                        step,
                        "criteria",
                        format!("Add at least {} criterion", MIN_FILLED_CRITERIA),
                    )]
                }
            }
            WizardStep::Constraints | WizardStep::Review => vec![],
        }
    }

    /// Aggregate of every step gate, used right before submission.
    pub fn validate_form(form: &DecisionFormData) -> Result<(), Vec<FieldIssue>> {
        let issues: Vec<FieldIssue> = WizardStep::ALL
            .iter()
            .flat_map(|step| Self::issues_for(*step, form))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
