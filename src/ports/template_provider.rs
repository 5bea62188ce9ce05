//! Template provider port - preset forms for the wizard.

use crate::domain::decision::DecisionTemplate;

/// Synchronous lookup of preset templates.
pub trait TemplateProvider: Send + Sync {
    /// Returns the template with `id`, or `None` if unknown.
    fn get_template_by_id(&self, id: &str) -> Option<DecisionTemplate>;

    /// Lists every available template.
    fn list_templates(&self) -> Vec<DecisionTemplate>;
}
