//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the decision wizard domain.

mod auth;
mod decision_status;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, Session};
pub use decision_status::DecisionStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{new_row_id, DecisionId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
