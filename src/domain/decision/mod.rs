//! Decision module - the form collected by the wizard and its persisted record.

mod form;
mod record;
mod template;
mod values;

pub use form::{
    reduce, ConstraintField, CriterionField, DecisionFormData, FormCommand, OptionField,
    MIN_CRITERION_ROWS, MIN_OPTION_ROWS,
};
pub use record::Decision;
pub use template::{DecisionTemplate, FormTemplate};
pub use values::{Constraint, ConstraintKind, Criterion, DecisionOption, Priority, Weight};
