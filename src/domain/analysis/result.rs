//! Analysis result as produced by the external analysis service.
//!
//! The result is read-only once received. Totals are carried exactly as the
//! service computed them; nothing in this crate recomputes a weighted total.

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Score of one option against one criterion, 0..=10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScore {
    pub criterion_id: String,
    pub criterion_name: String,
    pub score: f64,
}

/// All criterion scores for one option plus the service's weighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionScore {
    pub option_id: String,
    pub option_label: String,
    pub criteria_scores: Vec<CriterionScore>,
    pub total_score: f64,
}

/// The recommended option and the service's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub option_id: String,
    pub option_label: String,
    /// 0.0..=1.0
    pub confidence: f64,
    pub summary: String,
}

impl Recommendation {
    /// Confidence as a whole percentage, clamped to 0..=100.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// A reasoning field is either prose or a list of bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReasoningContent {
    Paragraph(String),
    Bullets(Vec<String>),
}

impl ReasoningContent {
    pub fn is_empty(&self) -> bool {
        match self {
            ReasoningContent::Paragraph(text) => text.trim().is_empty(),
            ReasoningContent::Bullets(items) => items.is_empty(),
        }
    }
}

impl From<&str> for ReasoningContent {
    fn from(text: &str) -> Self {
        ReasoningContent::Paragraph(text.to_string())
    }
}

impl From<Vec<String>> for ReasoningContent {
    fn from(items: Vec<String>) -> Self {
        ReasoningContent::Bullets(items)
    }
}

/// Narrative behind the recommendation. Every key is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reasoning {
    pub decomposition: ReasoningContent,
    pub assumptions: ReasoningContent,
    pub tradeoffs: ReasoningContent,
    pub risks: ReasoningContent,
    pub sensitivity: ReasoningContent,
}

/// Recommendation, per-option scores and reasoning for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub recommendation: Recommendation,
    pub scores: Vec<OptionScore>,
    pub reasoning: Reasoning,
}

impl AnalysisResult {
    /// Decodes a service payload, reporting missing keys as malformed data.
    pub fn from_value(value: serde_json::Value) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }
}
