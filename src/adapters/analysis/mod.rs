//! Analysis service adapters.

mod http_service;
mod mock_service;

pub use http_service::{HttpAnalysisConfig, HttpAnalysisService};
pub use mock_service::{MockAnalysisService, PROGRESS_MESSAGES};
