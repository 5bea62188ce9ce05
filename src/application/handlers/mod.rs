//! Application handlers.
//!
//! The wizard controller plus command and query handlers for the dashboard.

pub mod decisions;
pub mod wizard;

pub use decisions::{
    ArchiveDecisionCommand, ArchiveDecisionHandler, DecisionList, ListDecisionsHandler,
    ListDecisionsQuery,
};
pub use wizard::{SubmitOutcome, WizardController, WizardDeps, WizardError, WizardMode};
