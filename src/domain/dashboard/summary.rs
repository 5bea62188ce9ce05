//! Card view of a decision for the dashboard list.

use serde::Serialize;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DecisionStatus};

/// Confidence above which a card gets the "High Confidence" badge.
pub const HIGH_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionSummary {
    pub id: DecisionId,
    pub title: String,
    pub context: String,
    pub status: DecisionStatus,
    pub status_label: String,
    pub updated: String,
    pub option_count: usize,
    pub criterion_count: usize,
    pub recommended: Option<String>,
    pub high_confidence: bool,
    pub has_results: bool,
}

impl From<&Decision> for DecisionSummary {
    fn from(decision: &Decision) -> Self {
        let recommendation = decision.result.as_ref().map(|r| &r.recommendation);
        Self {
            id: decision.id,
            title: decision.form.title.clone(),
            context: decision.form.context.clone(),
            status: decision.status,
            status_label: decision.status.to_string(),
            updated: decision.updated_at.display_date(),
            option_count: decision.form.options.len(),
            criterion_count: decision.form.criteria.len(),
            recommended: recommendation.map(|r| r.option_label.clone()),
            high_confidence: recommendation.is_some_and(|r| r.confidence > HIGH_CONFIDENCE),
            has_results: decision.status.has_results() && decision.result.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionFormData;
    use crate::domain::foundation::UserId;

    #[test]
    fn draft_card_has_no_results() {
        let decision = Decision::new(
            DecisionId::new(),
            UserId::new("user-1").unwrap(),
            DecisionFormData::initial().set_title("Remote work"),
        );
        let card = DecisionSummary::from(&decision);

        assert_eq!(card.title, "Remote work");
        assert_eq!(card.status_label, "Draft");
        assert_eq!(card.option_count, 2);
        assert_eq!(card.criterion_count, 1);
        assert!(card.recommended.is_none());
        assert!(!card.high_confidence);
        assert!(!card.has_results);
    }
}
