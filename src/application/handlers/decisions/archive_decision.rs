//! ArchiveDecisionHandler - Command handler for archiving a decision.
//!
//! Archiving hides a decision from active consideration while keeping it
//! and any results for reference. Only drafts and completed decisions can
//! be archived.

use std::sync::Arc;

use tracing::info;

use crate::domain::decision::Decision;
use crate::domain::foundation::{
    DecisionId, DecisionStatus, DomainError, ErrorCode, Session, StateMachine,
};
use crate::ports::DecisionRepository;

/// Command to archive a decision.
#[derive(Debug, Clone)]
pub struct ArchiveDecisionCommand {
    pub decision_id: DecisionId,
}

pub struct ArchiveDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ArchiveDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        session: &Session,
        cmd: ArchiveDecisionCommand,
    ) -> Result<Decision, DomainError> {
        // 1. Load and check the transition before touching storage
        let mut decision = self.repository.get_decision(session, &cmd.decision_id).await?;
        if !decision.status.can_transition_to(&DecisionStatus::Archived) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot archive a decision that is {}", decision.status),
            )
            .with_detail("decision_id", cmd.decision_id.to_string()));
        }

        // 2. Persist the new status
        self.repository
            .update_decision_status(session, &cmd.decision_id, DecisionStatus::Archived)
            .await?;

        decision.transition_to(DecisionStatus::Archived)?;
        info!(decision_id = %cmd.decision_id, user_id = %session.user_id, "Decision archived");
        Ok(decision)
    }
}
