//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, status lifecycle, session)
//! - `decision` - Form data, row value objects, templates and the persisted record
//! - `wizard` - Step order, step gates and the step pointer
//! - `analysis` - Analysis result model, ranking and presentation views
//! - `dashboard` - Filtering, counting and card views over saved decisions

pub mod analysis;
pub mod dashboard;
pub mod decision;
pub mod foundation;
pub mod wizard;
