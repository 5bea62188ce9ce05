//! Dashboard views over a user's decisions.

mod filter;
mod summary;

pub use filter::{DecisionFilter, StatusCounts};
pub use summary::{DecisionSummary, HIGH_CONFIDENCE};
