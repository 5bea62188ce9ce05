//! Built-in template catalog.

use once_cell::sync::Lazy;

use crate::domain::decision::{
    Constraint, ConstraintKind, Criterion, DecisionOption, DecisionTemplate, FormTemplate,
    Priority, Weight,
};
use crate::ports::TemplateProvider;

fn option(id: &str, label: &str, notes: &str) -> DecisionOption {
    DecisionOption {
        id: id.to_string(),
        label: label.to_string(),
        notes: Some(notes.to_string()),
    }
}

fn criterion(id: &str, name: &str, weight: u8, description: &str) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: name.to_string(),
        weight: Weight::new(weight).unwrap_or_default(),
        description: Some(description.to_string()),
    }
}

fn constraint(id: &str, kind: ConstraintKind, value: &str, priority: u8) -> Constraint {
    Constraint {
        id: id.to_string(),
        kind,
        value: value.to_string(),
        priority: Priority::new(priority).unwrap_or_default(),
    }
}

static CATALOG: Lazy<Vec<DecisionTemplate>> = Lazy::new(|| {
    vec![
        DecisionTemplate {
            id: "programming-language".to_string(),
            name: "Which language to learn next".to_string(),
            template: FormTemplate {
                title: Some("Which programming language to learn next?".to_string()),
                context: Some(
                    "Looking to expand my skill set for better job opportunities".to_string(),
                ),
                options: Some(vec![
                    option("1", "Rust", "Systems programming"),
                    option("2", "Go", "Backend development"),
                    option("3", "Python", "Data science"),
                ]),
                criteria: Some(vec![
                    criterion("1", "Job Market", 9, "Demand in job market"),
                    criterion("2", "Learning Curve", 7, "Ease of learning"),
                ]),
                constraints: Some(vec![constraint("1", ConstraintKind::Timeline, "3 months", 4)]),
            },
        },
        DecisionTemplate {
            id: "cloud-provider".to_string(),
            name: "Cloud provider for a startup".to_string(),
            template: FormTemplate {
                title: Some("Best cloud provider for startup".to_string()),
                context: Some("Need scalable infrastructure for our SaaS product".to_string()),
                options: Some(vec![
                    option("1", "AWS", "Market leader"),
                    option("2", "GCP", "Google ecosystem"),
                    option("3", "Azure", "Enterprise focus"),
                ]),
                criteria: Some(vec![
                    criterion("1", "Cost", 10, "Monthly expenses"),
                    criterion("2", "Scalability", 8, "Growth potential"),
                ]),
                constraints: Some(vec![constraint(
                    "1",
                    ConstraintKind::Budget,
                    "$5000/month",
                    5,
                )]),
            },
        },
        DecisionTemplate {
            id: "work-arrangement".to_string(),
            name: "Remote, hybrid or office".to_string(),
            template: FormTemplate {
                title: Some("Remote work vs Office return".to_string()),
                context: Some("Company is evaluating hybrid work policies".to_string()),
                options: Some(vec![
                    option("1", "Full Remote", "Work from anywhere"),
                    option("2", "Hybrid", "3 days office, 2 remote"),
                    option("3", "Full Office", "Traditional setup"),
                ]),
                criteria: Some(vec![
                    criterion("1", "Productivity", 9, "Work output"),
                    criterion("2", "Work-Life Balance", 8, "Personal time"),
                ]),
                constraints: Some(Vec::new()),
            },
        },
        DecisionTemplate {
            id: "investment-strategy".to_string(),
            name: "Long-term investment strategy".to_string(),
            template: FormTemplate {
                title: Some("Investment strategy".to_string()),
                context: Some("Allocating savings for long-term growth".to_string()),
                options: Some(vec![
                    option("1", "Index Funds", "Low risk"),
                    option("2", "Real Estate", "Property investment"),
                ]),
                criteria: Some(vec![
                    criterion("1", "Risk Level", 8, "Investment risk"),
                    criterion("2", "Returns", 9, "Expected returns"),
                ]),
                constraints: Some(vec![constraint("1", ConstraintKind::Budget, "$50,000", 5)]),
            },
        },
    ]
});

/// Serves the compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateProvider;

impl BuiltinTemplateProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateProvider for BuiltinTemplateProvider {
    fn get_template_by_id(&self, id: &str) -> Option<DecisionTemplate> {
        CATALOG.iter().find(|t| t.id == id).cloned()
    }

    fn list_templates(&self) -> Vec<DecisionTemplate> {
        CATALOG.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionFormData;
    use crate::domain::wizard::StepValidator;

    #[test]
    fn catalog_ids_are_unique() {
        let templates = BuiltinTemplateProvider.list_templates();
        let mut ids: Vec<_> = templates.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn every_builtin_template_yields_a_submittable_form() {
        for template in BuiltinTemplateProvider.list_templates() {
            let form = DecisionFormData::initial().load_template(template.template);
            assert!(
                StepValidator::validate_form(&form).is_ok(),
                "template {} is incomplete",
                template.id
            );
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(BuiltinTemplateProvider.get_template_by_id("nope").is_none());
        assert!(BuiltinTemplateProvider
            .get_template_by_id("cloud-provider")
            .is_some());
    }
}
