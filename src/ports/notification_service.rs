//! Notification port - tells a user their analysis finished.
//!
//! Fire-and-forget: the wizard logs failures and never waits on them.

use async_trait::async_trait;

use crate::domain::foundation::{DecisionId, DomainError, UserId};

#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Notifies `user_id` that the decision titled `title` has results.
    async fn notify_decision_complete(
        &self,
        user_id: &UserId,
        title: &str,
        decision_id: &DecisionId,
    ) -> Result<(), DomainError>;
}
