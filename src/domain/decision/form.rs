//! In-progress decision form and its pure reducer.
//!
//! Every update takes the current snapshot and returns a new one; nothing
//! mutates in place and nothing fails. Validation is the step validator's job.

use serde::{Deserialize, Serialize};

use super::template::FormTemplate;
use super::values::{Constraint, ConstraintKind, Criterion, DecisionOption, Priority, Weight};

/// Minimum number of option rows the editor keeps on screen.
pub const MIN_OPTION_ROWS: usize = 2;

/// Minimum number of criterion rows the editor keeps on screen.
pub const MIN_CRITERION_ROWS: usize = 1;

/// The whole decision as collected by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionFormData {
    pub title: String,
    pub context: String,
    pub options: Vec<DecisionOption>,
    pub criteria: Vec<Criterion>,
    pub constraints: Vec<Constraint>,
}

/// Per-field change to a single option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionField {
    Label(String),
    Notes(Option<String>),
}

/// Per-field change to a single criterion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionField {
    Name(String),
    Weight(Weight),
    Description(Option<String>),
}

/// Per-field change to a single constraint row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintField {
    Kind(ConstraintKind),
    Value(String),
    Priority(Priority),
}

/// Tagged update dispatched through [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    SetTitle(String),
    SetContext(String),
    ReplaceOptions(Vec<DecisionOption>),
    ReplaceCriteria(Vec<Criterion>),
    ReplaceConstraints(Vec<Constraint>),
    LoadTemplate(FormTemplate),
    AddOption,
    RemoveOption(String),
    UpdateOption { id: String, field: OptionField },
    AddCriterion,
    RemoveCriterion(String),
    UpdateCriterion { id: String, field: CriterionField },
    AddConstraint,
    RemoveConstraint(String),
    UpdateConstraint { id: String, field: ConstraintField },
}

impl DecisionFormData {
    /// Wizard starting point: two blank options, one blank criterion,
    /// no constraints, empty title and context.
    pub fn initial() -> Self {
        Self {
            title: String::new(),
            context: String::new(),
            options: vec![DecisionOption::blank(), DecisionOption::blank()],
            criteria: vec![Criterion::blank()],
            constraints: Vec::new(),
        }
    }

    /// Applies a command, returning the next snapshot.
    pub fn apply(&self, command: FormCommand) -> Self {
        reduce(self, command)
    }

    pub fn set_title(&self, title: impl Into<String>) -> Self {
        self.apply(FormCommand::SetTitle(title.into()))
    }

    pub fn set_context(&self, context: impl Into<String>) -> Self {
        self.apply(FormCommand::SetContext(context.into()))
    }

    pub fn replace_options(&self, options: Vec<DecisionOption>) -> Self {
        self.apply(FormCommand::ReplaceOptions(options))
    }

    pub fn replace_criteria(&self, criteria: Vec<Criterion>) -> Self {
        self.apply(FormCommand::ReplaceCriteria(criteria))
    }

    pub fn replace_constraints(&self, constraints: Vec<Constraint>) -> Self {
        self.apply(FormCommand::ReplaceConstraints(constraints))
    }

    /// Bulk-replaces every field the template carries.
    pub fn load_template(&self, template: FormTemplate) -> Self {
        self.apply(FormCommand::LoadTemplate(template))
    }

    /// Options whose label is non-blank.
    pub fn filled_options(&self) -> impl Iterator<Item = &DecisionOption> {
        self.options.iter().filter(|o| o.is_filled())
    }

    /// Criteria whose name is non-blank.
    pub fn filled_criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(|c| c.is_filled())
    }
}

impl Default for DecisionFormData {
    fn default() -> Self {
        Self::initial()
    }
}

/// Pure reducer over [`FormCommand`].
pub fn reduce(state: &DecisionFormData, command: FormCommand) -> DecisionFormData {
    let mut next = state.clone();
    match command {
        FormCommand::SetTitle(title) => next.title = title,
        FormCommand::SetContext(context) => next.context = context,
        FormCommand::ReplaceOptions(options) => next.options = options,
        FormCommand::ReplaceCriteria(criteria) => next.criteria = criteria,
        FormCommand::ReplaceConstraints(constraints) => next.constraints = constraints,
        FormCommand::LoadTemplate(template) => {
            if let Some(title) = template.title {
                next.title = title;
            }
            if let Some(context) = template.context {
                next.context = context;
            }
            if let Some(options) = template.options {
                next.options = options;
            }
            if let Some(criteria) = template.criteria {
                next.criteria = criteria;
            }
            if let Some(constraints) = template.constraints {
                next.constraints = constraints;
            }
        }
        FormCommand::AddOption => next.options.push(DecisionOption::blank()),
        FormCommand::RemoveOption(id) => {
            if next.options.len() > MIN_OPTION_ROWS {
                next.options.retain(|o| o.id != id);
            }
        }
        FormCommand::UpdateOption { id, field } => {
            if let Some(option) = next.options.iter_mut().find(|o| o.id == id) {
                match field {
                    OptionField::Label(label) => option.label = label,
                    OptionField::Notes(notes) => option.notes = notes,
                }
            }
        }
        FormCommand::AddCriterion => next.criteria.push(Criterion::blank()),
        FormCommand::RemoveCriterion(id) => {
            if next.criteria.len() > MIN_CRITERION_ROWS {
                next.criteria.retain(|c| c.id != id);
            }
        }
        FormCommand::UpdateCriterion { id, field } => {
            if let Some(criterion) = next.criteria.iter_mut().find(|c| c.id == id) {
                match field {
                    CriterionField::Name(name) => criterion.name = name,
                    CriterionField::Weight(weight) => criterion.weight = weight,
                    CriterionField::Description(description) => {
                        criterion.description = description
                    }
                }
            }
        }
        FormCommand::AddConstraint => next.constraints.push(Constraint::blank()),
        FormCommand::RemoveConstraint(id) => next.constraints.retain(|c| c.id != id),
        FormCommand::UpdateConstraint { id, field } => {
            if let Some(constraint) = next.constraints.iter_mut().find(|c| c.id == id) {
                match field {
                    ConstraintField::Kind(kind) => constraint.kind = kind,
                    ConstraintField::Value(value) => constraint.value = value,
                    ConstraintField::Priority(priority) => constraint.priority = priority,
                }
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_has_two_blank_options_and_one_blank_criterion() {
        let form = DecisionFormData::initial();
        assert_eq!(form.options.len(), 2);
        assert!(form.options.iter().all(|o| o.label.is_empty()));
        assert_eq!(form.criteria.len(), 1);
        assert!(form.criteria[0].name.is_empty());
        assert!(form.constraints.is_empty());
        assert!(form.title.is_empty());
        assert!(form.context.is_empty());
    }

    #[test]
    fn initial_rows_have_distinct_ids() {
        let form = DecisionFormData::initial();
        assert_ne!(form.options[0].id, form.options[1].id);
    }

    #[test]
    fn set_title_returns_new_snapshot() {
        let before = DecisionFormData::initial();
        let after = before.set_title("Pick a language");
        assert_eq!(after.title, "Pick a language");
        assert!(before.title.is_empty());
    }

    #[test]
    fn replace_options_accepts_anything() {
        let form = DecisionFormData::initial().replace_options(vec![]);
        assert!(form.options.is_empty());
    }

    #[test]
    fn load_template_round_trips_a_full_snapshot() {
        let snapshot = DecisionFormData::initial()
            .set_title("Cloud provider")
            .set_context("Startup infra")
            .replace_options(vec![DecisionOption::new("AWS"), DecisionOption::new("GCP")])
            .replace_criteria(vec![Criterion::new("Cost")])
            .replace_constraints(vec![Constraint::new(ConstraintKind::Budget, "$5000/month")]);

        let loaded = DecisionFormData::initial().load_template(snapshot.clone().into());
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn partial_template_keeps_missing_fields() {
        let form = DecisionFormData::initial().set_context("keep me");
        let template = FormTemplate {
            title: Some("Hire".to_string()),
            ..FormTemplate::default()
        };
        let loaded = form.load_template(template);
        assert_eq!(loaded.title, "Hire");
        assert_eq!(loaded.context, "keep me");
        assert_eq!(loaded.options, form.options);
    }

    #[test]
    fn add_option_appends_blank_row() {
        let form = DecisionFormData::initial().apply(FormCommand::AddOption);
        assert_eq!(form.options.len(), 3);
        assert!(!form.options[2].is_filled());
    }

    #[test]
    fn remove_option_keeps_minimum_rows() {
        let form = DecisionFormData::initial();
        let id = form.options[0].id.clone();
        let after = form.apply(FormCommand::RemoveOption(id));
        assert_eq!(after.options.len(), 2);
    }

    #[test]
    fn remove_option_above_minimum_removes_by_id() {
        let form = DecisionFormData::initial().apply(FormCommand::AddOption);
        let id = form.options[1].id.clone();
        let after = form.apply(FormCommand::RemoveOption(id.clone()));
        assert_eq!(after.options.len(), 2);
        assert!(after.options.iter().all(|o| o.id != id));
    }

    #[test]
    fn update_option_changes_only_matching_row() {
        let form = DecisionFormData::initial();
        let id = form.options[1].id.clone();
        let after = form.apply(FormCommand::UpdateOption {
            id,
            field: OptionField::Label("Rust".to_string()),
        });
        assert_eq!(after.options[0].label, "");
        assert_eq!(after.options[1].label, "Rust");
    }

    #[test]
    fn update_unknown_row_is_a_no_op() {
        let form = DecisionFormData::initial();
        let after = form.apply(FormCommand::UpdateCriterion {
            id: "missing".to_string(),
            field: CriterionField::Name("Speed".to_string()),
        });
        assert_eq!(after, form);
    }

    #[test]
    fn remove_last_criterion_is_ignored() {
        let form = DecisionFormData::initial();
        let id = form.criteria[0].id.clone();
        assert_eq!(form.apply(FormCommand::RemoveCriterion(id)).criteria.len(), 1);
    }

    #[test]
    fn update_criterion_weight() {
        let form = DecisionFormData::initial();
        let id = form.criteria[0].id.clone();
        let after = form.apply(FormCommand::UpdateCriterion {
            id,
            field: CriterionField::Weight(Weight::new(8).unwrap()),
        });
        assert_eq!(after.criteria[0].weight.value(), 8);
    }

    #[test]
    fn constraints_can_be_added_and_removed_freely() {
        let form = DecisionFormData::initial().apply(FormCommand::AddConstraint);
        assert_eq!(form.constraints.len(), 1);
        let id = form.constraints[0].id.clone();
        let form = form.apply(FormCommand::UpdateConstraint {
            id: id.clone(),
            field: ConstraintField::Kind(ConstraintKind::Risk),
        });
        assert_eq!(form.constraints[0].kind, ConstraintKind::Risk);
        assert!(form.apply(FormCommand::RemoveConstraint(id)).constraints.is_empty());
    }

    #[test]
    fn form_serializes_with_plain_field_names() {
        let json = serde_json::to_value(DecisionFormData::initial()).unwrap();
        assert!(json.get("title").is_some());
        assert_eq!(json["criteria"][0]["weight"], 5);
    }
}
