//! Application layer - orchestration over domain types and ports.
//!
//! The wizard controller owns the async submission flow; the dashboard
//! handlers follow the command/query handler shape.

pub mod handlers;

pub use handlers::{
    ArchiveDecisionCommand, ArchiveDecisionHandler, DecisionList, ListDecisionsHandler,
    ListDecisionsQuery, SubmitOutcome, WizardController, WizardDeps, WizardError, WizardMode,
};
