//! ListDecisionsHandler - Query handler for the dashboard list.

use std::sync::Arc;

use crate::domain::dashboard::{DecisionFilter, DecisionSummary, StatusCounts};
use crate::domain::foundation::{DomainError, Session};
use crate::ports::DecisionRepository;

/// Query for the signed-in user's decisions.
#[derive(Debug, Clone, Default)]
pub struct ListDecisionsQuery {
    pub filter: DecisionFilter,
}

/// Filtered cards plus per-status counts over the unfiltered set.
#[derive(Debug, Clone)]
pub struct DecisionList {
    pub items: Vec<DecisionSummary>,
    pub counts: StatusCounts,
}

impl DecisionList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        session: &Session,
        query: ListDecisionsQuery,
    ) -> Result<DecisionList, DomainError> {
        let decisions = self
            .repository
            .list_decisions(session, &session.user_id)
            .await?;

        let counts = StatusCounts::tally(&decisions);
        let items = decisions
            .iter()
            .filter(|d| query.filter.matches(d))
            .map(DecisionSummary::from)
            .collect();

        Ok(DecisionList { items, counts })
    }
}
