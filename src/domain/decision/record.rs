//! Persisted decision record.

use serde::{Deserialize, Serialize};

use super::form::DecisionFormData;
use crate::domain::analysis::AnalysisResult;
use crate::domain::foundation::{
    DecisionId, DecisionStatus, StateMachine, Timestamp, UserId, ValidationError,
};

/// A decision as stored by the persistence backend.
///
/// The analysis result is replaced wholesale on re-analysis, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub user_id: UserId,
    pub form: DecisionFormData,
    pub status: DecisionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Decision {
    /// Creates a new draft decision owned by `user_id`.
    pub fn new(id: DecisionId, user_id: UserId, form: DecisionFormData) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            form,
            status: DecisionStatus::Draft,
            result: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves to `target`, enforcing the status state machine.
    pub fn transition_to(&mut self, target: DecisionStatus) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(target)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Replaces the form contents.
    pub fn replace_form(&mut self, form: DecisionFormData) {
        self.form = form;
        self.updated_at = Timestamp::now();
    }

    /// Stores a freshly received analysis result.
    pub fn attach_result(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.updated_at = Timestamp::now();
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn title(&self) -> &str {
        &self.form.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Decision {
        Decision::new(
            DecisionId::new(),
            UserId::new("user-1").unwrap(),
            DecisionFormData::initial().set_title("Pick a language"),
        )
    }

    #[test]
    fn new_decision_is_draft_without_result() {
        let decision = draft();
        assert_eq!(decision.status, DecisionStatus::Draft);
        assert!(decision.result.is_none());
        assert_eq!(decision.title(), "Pick a language");
    }

    #[test]
    fn transition_follows_state_machine() {
        let mut decision = draft();
        decision.transition_to(DecisionStatus::Analyzing).unwrap();
        assert_eq!(decision.status, DecisionStatus::Analyzing);
        assert!(decision.transition_to(DecisionStatus::Archived).is_err());
        assert_eq!(decision.status, DecisionStatus::Analyzing);
    }

    #[test]
    fn ownership_check_compares_user_ids() {
        let decision = draft();
        assert!(decision.is_owned_by(&UserId::new("user-1").unwrap()));
        assert!(!decision.is_owned_by(&UserId::new("user-2").unwrap()));
    }
}
