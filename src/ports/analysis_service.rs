//! Analysis Service Port - the external function that evaluates a decision.
//!
//! How the recommendation is computed is entirely the service's concern.
//! The wizard hands over the full form, relays progress messages while the
//! call is in flight, and receives a complete [`AnalysisResult`] or a failure.
//!
//! # Example
//!
//! ```ignore
//! let result = service
//!     .analyze(&form, &|message: &str| println!("{message}"))
//!     .await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::DecisionFormData;

/// Callback receiving human-readable status strings during analysis.
pub type ProgressCallback<'a> = &'a (dyn Fn(&str) + Send + Sync);

/// Port for the remote analysis function.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Analyzes a submitted form.
    ///
    /// Calls `on_progress` zero or more times before resolving.
    async fn analyze(
        &self,
        form: &DecisionFormData,
        on_progress: ProgressCallback<'_>,
    ) -> Result<AnalysisResult, AnalysisServiceError>;
}

/// Any inability to produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisServiceError {
    /// Service is unreachable or returned a server error.
    #[error("analysis service unavailable: {0}")]
    Unavailable(String),

    /// The call exceeded the configured deadline.
    #[error("analysis timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The service answered with something that is not an analysis result.
    #[error("invalid analysis response: {0}")]
    InvalidResponse(String),

    /// The service refused the request.
    #[error("analysis rejected: {0}")]
    Rejected(String),
}

impl AnalysisServiceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Returns true if a retry might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_includes_seconds() {
        let err = AnalysisServiceError::Timeout { timeout_secs: 120 };
        assert_eq!(err.to_string(), "analysis timed out after 120s");
    }

    #[test]
    fn only_transient_failures_are_retryable() {
        assert!(AnalysisServiceError::unavailable("503").is_retryable());
        assert!(AnalysisServiceError::Timeout { timeout_secs: 1 }.is_retryable());
        assert!(!AnalysisServiceError::invalid_response("bad json").is_retryable());
        assert!(!AnalysisServiceError::Rejected("quota".into()).is_retryable());
    }
}
