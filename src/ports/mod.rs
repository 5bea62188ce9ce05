//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionRepository` - Decision records and their analysis results
//! - `AnalysisService` - Remote analysis function with progress messages
//! - `NotificationService` - Fire-and-forget completion notices
//! - `TemplateProvider` - Preset forms
//! - `AuthProvider` - Current user session

mod analysis_service;
mod auth_provider;
mod decision_repository;
mod notification_service;
mod template_provider;

pub use analysis_service::{AnalysisService, AnalysisServiceError, ProgressCallback};
pub use auth_provider::AuthProvider;
pub use decision_repository::DecisionRepository;
pub use notification_service::NotificationService;
pub use template_provider::TemplateProvider;
