//! In-Memory Decision Repository
//!
//! Stores decisions in a process-local map. Used by the demo binary and by
//! tests, which can also inject failures per operation and inspect the
//! order in which operations were performed.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::{Decision, DecisionFormData};
use crate::domain::foundation::{
    DecisionId, DecisionStatus, DomainError, ErrorCode, Session, UserId,
};
use crate::ports::DecisionRepository;

/// Repository operations, for failure injection and call logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepositoryOp {
    Create,
    UpdateStatus(DecisionStatus),
    UpdateFull,
    Get,
    SaveResult,
    List,
}

/// In-memory decision storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionRepository {
    decisions: Arc<RwLock<HashMap<DecisionId, Decision>>>,
    failing: Arc<RwLock<HashSet<RepositoryOp>>>,
    log: Arc<RwLock<Vec<RepositoryOp>>>,
}

impl InMemoryDecisionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every future call of `op` fail with a database error.
    pub async fn fail_on(&self, op: RepositoryOp) {
        self.failing.write().await.insert(op);
    }

    /// Clears all injected failures.
    pub async fn heal(&self) {
        self.failing.write().await.clear();
    }

    /// Operations performed so far, in order. Failed calls are included.
    pub async fn operations(&self) -> Vec<RepositoryOp> {
        self.log.read().await.clone()
    }

    /// Inserts a decision directly, bypassing the port.
    pub async fn insert(&self, decision: Decision) {
        self.decisions.write().await.insert(decision.id, decision);
    }

    /// Reads a decision directly, bypassing ownership checks.
    pub async fn snapshot(&self, id: &DecisionId) -> Option<Decision> {
        self.decisions.read().await.get(id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.decisions.read().await.len()
    }

    async fn record(&self, op: RepositoryOp) -> Result<(), DomainError> {
        self.log.write().await.push(op.clone());
        if self.failing.read().await.contains(&op) {
            return Err(DomainError::database(format!("Simulated failure on {:?}", op)));
        }
        Ok(())
    }

    fn not_found(id: &DecisionId) -> DomainError {
        DomainError::new(ErrorCode::DecisionNotFound, format!("Decision not found: {}", id))
    }

    fn check_owner(session: &Session, decision: &Decision) -> Result<(), DomainError> {
        if decision.is_owned_by(&session.user_id) {
            Ok(())
        } else {
            Err(DomainError::new(ErrorCode::Forbidden, "Permission denied"))
        }
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn create_decision(
        &self,
        _session: &Session,
        user_id: &UserId,
        form: &DecisionFormData,
    ) -> Result<Decision, DomainError> {
        self.record(RepositoryOp::Create).await?;
        let decision = Decision::new(DecisionId::new(), user_id.clone(), form.clone());
        self.decisions
            .write()
            .await
            .insert(decision.id, decision.clone());
        Ok(decision)
    }

    async fn update_decision_status(
        &self,
        session: &Session,
        id: &DecisionId,
        status: DecisionStatus,
    ) -> Result<(), DomainError> {
        self.record(RepositoryOp::UpdateStatus(status)).await?;
        let mut decisions = self.decisions.write().await;
        let decision = decisions.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        Self::check_owner(session, decision)?;
        decision.transition_to(status).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })
    }

    async fn update_decision_full(
        &self,
        session: &Session,
        id: &DecisionId,
        form: &DecisionFormData,
    ) -> Result<(), DomainError> {
        self.record(RepositoryOp::UpdateFull).await?;
        let mut decisions = self.decisions.write().await;
        let decision = decisions.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        Self::check_owner(session, decision)?;
        decision.replace_form(form.clone());
        Ok(())
    }

    async fn get_decision(
        &self,
        session: &Session,
        id: &DecisionId,
    ) -> Result<Decision, DomainError> {
        self.record(RepositoryOp::Get).await?;
        let decisions = self.decisions.read().await;
        let decision = decisions.get(id).ok_or_else(|| Self::not_found(id))?;
        Self::check_owner(session, decision)?;
        Ok(decision.clone())
    }

    async fn save_analysis_result(
        &self,
        session: &Session,
        id: &DecisionId,
        result: &AnalysisResult,
    ) -> Result<(), DomainError> {
        self.record(RepositoryOp::SaveResult).await?;
        let mut decisions = self.decisions.write().await;
        let decision = decisions.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        Self::check_owner(session, decision)?;
        decision.attach_result(result.clone());
        Ok(())
    }

    async fn list_decisions(
        &self,
        _session: &Session,
        user_id: &UserId,
    ) -> Result<Vec<Decision>, DomainError> {
        self.record(RepositoryOp::List).await?;
        let mut owned: Vec<Decision> = self
            .decisions
            .read()
            .await
            .values()
            .filter(|d| d.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user: &str) -> Session {
        Session::new(UserId::new(user).unwrap(), "token")
    }

    fn form() -> DecisionFormData {
        DecisionFormData::initial().set_title("Pick a language")
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = InMemoryDecisionRepository::new();
        let s = session("user-1");
        let created = repo.create_decision(&s, &s.user_id, &form()).await.unwrap();

        let loaded = repo.get_decision(&s, &created.id).await.unwrap();
        assert_eq!(loaded.form, form());
        assert_eq!(loaded.status, DecisionStatus::Draft);
    }

    #[tokio::test]
    async fn status_updates_follow_state_machine() {
        let repo = InMemoryDecisionRepository::new();
        let s = session("user-1");
        let created = repo.create_decision(&s, &s.user_id, &form()).await.unwrap();

        repo.update_decision_status(&s, &created.id, DecisionStatus::Analyzing)
            .await
            .unwrap();
        let err = repo
            .update_decision_status(&s, &created.id, DecisionStatus::Archived)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn unknown_decision_is_not_found() {
        let repo = InMemoryDecisionRepository::new();
        let err = repo
            .get_decision(&session("user-1"), &DecisionId::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DecisionNotFound);
    }

    #[tokio::test]
    async fn other_users_cannot_read() {
        let repo = InMemoryDecisionRepository::new();
        let owner = session("user-1");
        let created = repo
            .create_decision(&owner, &owner.user_id, &form())
            .await
            .unwrap();

        let err = repo
            .get_decision(&session("user-2"), &created.id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn injected_failure_is_reported_and_logged() {
        let repo = InMemoryDecisionRepository::new();
        repo.fail_on(RepositoryOp::Create).await;
        let s = session("user-1");

        let err = repo.create_decision(&s, &s.user_id, &form()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(repo.operations().await, vec![RepositoryOp::Create]);
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn list_returns_only_owned_decisions() {
        let repo = InMemoryDecisionRepository::new();
        let alice = session("alice");
        let bob = session("bob");
        repo.create_decision(&alice, &alice.user_id, &form()).await.unwrap();
        repo.create_decision(&bob, &bob.user_id, &form()).await.unwrap();

        let listed = repo.list_decisions(&alice, &alice.user_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_owned_by(&alice.user_id));
    }
}
