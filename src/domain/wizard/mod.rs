//! Wizard module - step order, step gates, and the step pointer.
//!
//! Everything here is synchronous and side-effect free. The async
//! submission flow lives in the application layer's `WizardController`.

mod navigator;
mod step;
mod validator;

pub use navigator::{Advance, WizardNavigator};
pub use step::WizardStep;
pub use validator::{
    FieldIssue, StepValidator, MIN_FILLED_CRITERIA, MIN_FILLED_OPTIONS, MIN_TITLE_LEN,
};
