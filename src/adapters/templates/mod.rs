//! Template provider adapters.

mod builtin;
mod yaml;

pub use builtin::BuiltinTemplateProvider;
pub use yaml::{TemplateLoadError, YamlTemplateProvider};
