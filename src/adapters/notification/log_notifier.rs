//! Notification service that writes completion notices to the log.
//!
//! Stands in for email or push delivery when none is configured.

use async_trait::async_trait;

use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::ports::NotificationService;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationService;

impl LogNotificationService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationService for LogNotificationService {
    async fn notify_decision_complete(
        &self,
        user_id: &UserId,
        title: &str,
        decision_id: &DecisionId,
    ) -> Result<(), DomainError> {
        tracing::info!(
            user_id = %user_id,
            decision_id = %decision_id,
            title,
            "Decision analysis complete"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_succeeds() {
        let user = UserId::new("user-1").unwrap();
        let result = LogNotificationService
            .notify_decision_complete(&user, "Pick", &DecisionId::new())
            .await;
        assert!(result.is_ok());
    }
}
