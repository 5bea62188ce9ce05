//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory decision repository
//! - `analysis` - HTTP analysis function and a scripted mock
//! - `notification` - Log-backed completion notices
//! - `templates` - Built-in and YAML template catalogs
//! - `auth` - Fixed-session auth provider

pub mod analysis;
pub mod auth;
pub mod memory;
pub mod notification;
pub mod templates;

pub use analysis::{HttpAnalysisConfig, HttpAnalysisService, MockAnalysisService};
pub use auth::StaticAuthProvider;
pub use memory::{InMemoryDecisionRepository, RepositoryOp};
pub use notification::LogNotificationService;
pub use templates::{BuiltinTemplateProvider, TemplateLoadError, YamlTemplateProvider};
