//! Errors surfaced to the user by the wizard.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DecisionStatus, DomainError, ErrorCode};
use crate::domain::wizard::FieldIssue;
use crate::ports::AnalysisServiceError;

/// Every collaborator failure is converted into one of these at the
/// controller boundary.
#[derive(Debug, Clone, Error)]
pub enum WizardError {
    /// Full-form validation failed; nothing was persisted.
    #[error("Form is incomplete: {}", join_issues(.0))]
    ValidationFailed(Vec<FieldIssue>),

    #[error("Submission is only possible from the review step")]
    NotAtReview,

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The stored decision is in a status that forbids editing.
    #[error("Decision cannot be edited while {0}")]
    NotEditable(DecisionStatus),

    #[error("Persistence failed: {0}")]
    Persistence(DomainError),

    #[error("Analysis failed: {0}")]
    Analysis(AnalysisServiceError),

    #[error("Analysis was cancelled")]
    Cancelled,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            WizardError::NotAtReview => ErrorCode::NotAtReview,
            WizardError::Unauthorized(_) => ErrorCode::Unauthorized,
            WizardError::TemplateNotFound(_) => ErrorCode::TemplateNotFound,
            WizardError::NotEditable(_) => ErrorCode::InvalidStateTransition,
            WizardError::Persistence(err) => err.code,
            WizardError::Analysis(_) => ErrorCode::AnalysisFailed,
            WizardError::Cancelled => ErrorCode::AnalysisCancelled,
        }
    }

    /// Message suitable for showing to the user.
    pub fn message(&self) -> String {
        match self {
            WizardError::ValidationFailed(issues) => issues
                .iter()
                .map(|i| i.message.clone())
                .collect::<Vec<_>>()
                .join(". "),
            WizardError::NotAtReview => "Review your decision before submitting.".to_string(),
            WizardError::Unauthorized(_) => "Please sign in to save your decision.".to_string(),
            WizardError::TemplateNotFound(id) => format!("Template \"{}\" is not available.", id),
            WizardError::NotEditable(status) => {
                format!("{} decisions can't be edited or re-analyzed.", status)
            }
            WizardError::Persistence(_) => {
                "Failed to save your decision. Please try again.".to_string()
            }
            WizardError::Analysis(AnalysisServiceError::Timeout { .. }) => {
                "Analysis is taking too long. Please try again.".to_string()
            }
            WizardError::Analysis(_) => {
                "Failed to analyze decision. Please try again.".to_string()
            }
            WizardError::Cancelled => "Analysis cancelled.".to_string(),
        }
    }

    /// Field issues, if this is a validation failure.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            WizardError::ValidationFailed(issues) => issues,
            _ => &[],
        }
    }
}

impl From<AuthError> for WizardError {
    fn from(err: AuthError) -> Self {
        WizardError::Unauthorized(err.to_string())
    }
}

impl From<DomainError> for WizardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthorized | ErrorCode::Forbidden => {
                WizardError::Unauthorized(err.message)
            }
            _ => WizardError::Persistence(err),
        }
    }
}

impl From<AnalysisServiceError> for WizardError {
    fn from(err: AnalysisServiceError) -> Self {
        WizardError::Analysis(err)
    }
}
