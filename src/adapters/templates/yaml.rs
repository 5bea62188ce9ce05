//! YAML template catalog loaded from disk.
//!
//! The file is a list of templates:
//!
//! ```yaml
//! - id: hire
//!   name: Hiring decision
//!   template:
//!     title: Which candidate to hire
//!     options:
//!       - { id: "1", label: Alice }
//!       - { id: "2", label: Bob }
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::decision::DecisionTemplate;
use crate::ports::TemplateProvider;

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse templates: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate template id: {0}")]
    DuplicateId(String),
}

/// Templates read once from a YAML document.
#[derive(Debug, Clone, Default)]
pub struct YamlTemplateProvider {
    templates: Vec<DecisionTemplate>,
}

impl YamlTemplateProvider {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TemplateLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TemplateLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, TemplateLoadError> {
        let templates: Vec<DecisionTemplate> = serde_yaml::from_str(raw)?;
        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.id == template.id) {
                return Err(TemplateLoadError::DuplicateId(template.id.clone()));
            }
        }
        tracing::debug!(count = templates.len(), "loaded decision templates");
        Ok(Self { templates })
    }
}

impl TemplateProvider for YamlTemplateProvider {
    fn get_template_by_id(&self, id: &str) -> Option<DecisionTemplate> {
        self.templates.iter().find(|t| t.id == id).cloned()
    }

    fn list_templates(&self) -> Vec<DecisionTemplate> {
        self.templates.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::ConstraintKind;
    use std::io::Write;

    const CATALOG: &str = r#"
- id: hire
  name: Hiring decision
  template:
    title: Which candidate to hire
    options:
      - { id: "1", label: Alice, notes: Senior }
      - { id: "2", label: Bob }
    criteria:
      - { id: "c1", name: Experience, weight: 8 }
    constraints:
      - { id: "k1", type: timeline, value: Two weeks }
- id: partial
  name: Title only
  template:
    title: Just a title
"#;

    #[test]
    fn parses_full_and_partial_templates() {
        let provider = YamlTemplateProvider::from_yaml(CATALOG).unwrap();
        assert_eq!(provider.list_templates().len(), 2);

        let hire = provider.get_template_by_id("hire").unwrap();
        let criteria = hire.template.criteria.unwrap();
        assert_eq!(criteria[0].weight.value(), 8);
        let constraints = hire.template.constraints.unwrap();
        assert_eq!(constraints[0].kind, ConstraintKind::Timeline);
        assert_eq!(constraints[0].priority.value(), 3);

        let partial = provider.get_template_by_id("partial").unwrap();
        assert!(partial.template.options.is_none());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let provider = YamlTemplateProvider::from_path(file.path()).unwrap();
        assert!(provider.get_template_by_id("hire").is_some());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("templates.yaml");
        let err = YamlTemplateProvider::from_path(&missing).unwrap_err();
        assert!(err.to_string().contains("templates.yaml"));
    }

    #[test]
    fn out_of_range_weight_is_a_parse_error() {
        let raw = r#"
- id: bad
  name: Bad
  template:
    criteria:
      - { id: "c1", name: Cost, weight: 11 }
"#;
        assert!(matches!(
            YamlTemplateProvider::from_yaml(raw),
            Err(TemplateLoadError::Parse(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"
- { id: a, name: One, template: {} }
- { id: a, name: Two, template: {} }
"#;
        assert!(matches!(
            YamlTemplateProvider::from_yaml(raw),
            Err(TemplateLoadError::DuplicateId(id)) if id == "a"
        ));
    }
}
