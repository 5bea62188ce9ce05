//! Decision repository port - persistence of decision records.
//!
//! Implementations talk to the backend that stores decisions. Every call
//! carries the caller's [`Session`] explicitly so adapters can forward the
//! bearer token; nothing reads identity from ambient state.
//!
//! All failures are reported as `DomainError` with `DatabaseError` for
//! network/storage problems and `DecisionNotFound` for unknown ids. Callers
//! pass messages through without interpreting codes further.

use async_trait::async_trait;

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::{Decision, DecisionFormData};
use crate::domain::foundation::{DecisionId, DecisionStatus, DomainError, Session, UserId};

/// Repository port for decision records.
///
/// Single writer per edit session; last write wins.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Creates a new draft decision for `user_id`.
    async fn create_decision(
        &self,
        session: &Session,
        user_id: &UserId,
        form: &DecisionFormData,
    ) -> Result<Decision, DomainError>;

    /// Sets the lifecycle status of a decision.
    async fn update_decision_status(
        &self,
        session: &Session,
        id: &DecisionId,
        status: DecisionStatus,
    ) -> Result<(), DomainError>;

    /// Overwrites the form contents of an existing decision.
    async fn update_decision_full(
        &self,
        session: &Session,
        id: &DecisionId,
        form: &DecisionFormData,
    ) -> Result<(), DomainError>;

    /// Loads one decision.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if no such decision exists
    async fn get_decision(&self, session: &Session, id: &DecisionId)
        -> Result<Decision, DomainError>;

    /// Stores the analysis result, replacing any previous one.
    async fn save_analysis_result(
        &self,
        session: &Session,
        id: &DecisionId,
        result: &AnalysisResult,
    ) -> Result<(), DomainError>;

    /// Lists a user's decisions, most recently updated first.
    async fn list_decisions(
        &self,
        session: &Session,
        user_id: &UserId,
    ) -> Result<Vec<Decision>, DomainError>;
}
