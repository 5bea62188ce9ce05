//! Decision dashboard command and query handlers.

mod archive_decision;
mod list_decisions;

pub use archive_decision::{ArchiveDecisionCommand, ArchiveDecisionHandler};
pub use list_decisions::{DecisionList, ListDecisionsHandler, ListDecisionsQuery};
