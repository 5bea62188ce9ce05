//! Analysis data-integrity errors.

use thiserror::Error;

/// Failures raised while ranking or rendering an analysis result.
///
/// None of these are user-recoverable: they mean the analysis service
/// returned something that breaks its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A completed analysis carried no option scores.
    #[error("Analysis result contains no option scores")]
    EmptyResultSet,

    /// An option was scored against a different set of criteria than the first option.
    #[error("Option '{option_id}' was scored on criteria {found:?}, expected {expected:?}")]
    CriteriaMismatch {
        option_id: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The payload is missing required keys or has the wrong shape.
    #[error("Malformed analysis result: {0}")]
    Malformed(String),
}

impl AnalysisError {
    pub fn malformed(message: impl Into<String>) -> Self {
        AnalysisError::Malformed(message.into())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Malformed(err.to_string())
    }
}
