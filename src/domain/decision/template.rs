//! Preset templates that pre-populate the wizard.

use serde::{Deserialize, Serialize};

use super::form::DecisionFormData;
use super::values::{Constraint, Criterion, DecisionOption};

/// Partial form: only the fields that are present overwrite the current form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DecisionOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<Criterion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<Constraint>>,
}

impl From<DecisionFormData> for FormTemplate {
    fn from(form: DecisionFormData) -> Self {
        Self {
            title: Some(form.title),
            context: Some(form.context),
            options: Some(form.options),
            criteria: Some(form.criteria),
            constraints: Some(form.constraints),
        }
    }
}

/// A named preset as returned by a template provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTemplate {
    pub id: String,
    pub name: String,
    pub template: FormTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_form_converts_to_complete_template() {
        let template: FormTemplate = DecisionFormData::initial().into();
        assert!(template.title.is_some());
        assert_eq!(template.options.map(|o| o.len()), Some(2));
        assert_eq!(template.constraints.map(|c| c.len()), Some(0));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let template: FormTemplate = serde_json::from_str(r#"{"title":"Hire"}"#).unwrap();
        assert_eq!(template.title.as_deref(), Some("Hire"));
        assert!(template.criteria.is_none());
    }
}
