//! Wizard session orchestration.

mod controller;
mod errors;

pub use controller::{
    SubmitOutcome, WizardController, WizardDeps, WizardMode, DEFAULT_ANALYSIS_TIMEOUT,
};
pub use errors::WizardError;
