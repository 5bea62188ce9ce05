//! Result Renderer - turns an analysis result into display-ready shapes.
//!
//! Produces the radar comparison, the total-score bar series, the score
//! table and the grouped reasoning sections. Criterion scores are matched
//! by `criterion_id`, using the first option's order for axes and columns;
//! an option scored on a different criterion set is rejected.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{
    AnalysisError, AnalysisResult, OptionScore, ReasoningContent, Recommendation, ScoreAggregator,
};

/// Colour band of a single criterion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

/// Presentation policy for score colouring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// Scores at or above this are `High`.
    pub high: f64,
    /// Scores at or above this (and below `high`) are `Medium`.
    pub medium: f64,
}

impl ScoreThresholds {
    pub fn new(high: f64, medium: f64) -> Self {
        Self { high, medium }
    }

    pub fn band(&self, score: f64) -> ScoreBand {
        if score >= self.high {
            ScoreBand::High
        } else if score >= self.medium {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            high: 8.0,
            medium: 5.0,
        }
    }
}

/// One radar axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub criterion_id: String,
    pub criterion_name: String,
}

/// One option's polygon: a value per axis, in axis order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    pub option_id: String,
    pub option_label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub axes: Vec<RadarAxis>,
    pub series: Vec<RadarSeries>,
}

/// One bar of the total-score chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    pub option_id: String,
    pub option_label: String,
    pub total_score: f64,
    /// True for every option sharing the maximum total.
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCell {
    pub criterion_id: String,
    pub score: f64,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub option_id: String,
    pub option_label: String,
    pub cells: Vec<ScoreCell>,
    pub total_score: f64,
    pub is_best: bool,
}

/// Options as rows, criteria plus a trailing total as columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub columns: Vec<String>,
    pub rows: Vec<ScoreRow>,
}

/// Fixed reasoning taxonomy, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningKey {
    Decomposition,
    Assumptions,
    Tradeoffs,
    Risks,
    Sensitivity,
}

impl ReasoningKey {
    pub const ALL: [ReasoningKey; 5] = [
        ReasoningKey::Decomposition,
        ReasoningKey::Assumptions,
        ReasoningKey::Tradeoffs,
        ReasoningKey::Risks,
        ReasoningKey::Sensitivity,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReasoningKey::Decomposition => "Analysis Breakdown",
            ReasoningKey::Assumptions => "Key Assumptions",
            ReasoningKey::Tradeoffs => "Trade-offs",
            ReasoningKey::Risks => "Potential Risks",
            ReasoningKey::Sensitivity => "Sensitivity Analysis",
        }
    }
}

/// A reasoning section rendered as a paragraph or a bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningSection {
    pub key: ReasoningKey,
    pub title: String,
    pub body: ReasoningContent,
}

/// Recommendation card contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationView {
    pub option_id: String,
    pub option_label: String,
    pub confidence_percent: u8,
    pub summary: String,
}

impl From<&Recommendation> for RecommendationView {
    fn from(rec: &Recommendation) -> Self {
        Self {
            option_id: rec.option_id.clone(),
            option_label: rec.option_label.clone(),
            confidence_percent: rec.confidence_percent(),
            summary: rec.summary.clone(),
        }
    }
}

/// Everything the results page draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedResult {
    pub recommendation: RecommendationView,
    pub radar: RadarChart,
    pub bars: Vec<BarEntry>,
    pub table: ScoreTable,
    pub reasoning: Vec<ReasoningSection>,
}

/// Builds display shapes from an [`AnalysisResult`].
#[derive(Debug, Clone, Default)]
pub struct ResultRenderer {
    thresholds: ScoreThresholds,
}

impl ResultRenderer {
    pub fn new(thresholds: ScoreThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> ScoreThresholds {
        self.thresholds
    }

    /// Renders every view of the result.
    ///
    /// # Errors
    ///
    /// - `EmptyResultSet` if there are no option scores
    /// - `CriteriaMismatch` if options were scored on different criteria
    pub fn render(&self, result: &AnalysisResult) -> Result<RenderedResult, AnalysisError> {
        let aligned = align_scores(&result.scores)?;

        Ok(RenderedResult {
            recommendation: RecommendationView::from(&result.recommendation),
            radar: self.radar(&aligned),
            bars: self.bars(&result.scores)?,
            table: self.table(&aligned, &result.scores)?,
            reasoning: self.reasoning_sections(result),
        })
    }

    /// Decodes a raw payload first, so missing keys surface as `Malformed`.
    pub fn render_value(&self, value: serde_json::Value) -> Result<RenderedResult, AnalysisError> {
        self.render(&AnalysisResult::from_value(value)?)
    }

    /// Radar chart: one axis per criterion, one series per option.
    pub fn radar_chart(&self, scores: &[OptionScore]) -> Result<RadarChart, AnalysisError> {
        Ok(self.radar(&align_scores(scores)?))
    }

    /// Bar series of totals with every maximum flagged.
    pub fn bars(&self, scores: &[OptionScore]) -> Result<Vec<BarEntry>, AnalysisError> {
        let max = ScoreAggregator::rank_options(scores)?.max_total();
        Ok(scores
            .iter()
            .map(|s| BarEntry {
                option_id: s.option_id.clone(),
                option_label: s.option_label.clone(),
                total_score: s.total_score,
                highlighted: s.total_score == max,
            })
            .collect())
    }

    /// Score table with banded cells.
    pub fn score_table(&self, scores: &[OptionScore]) -> Result<ScoreTable, AnalysisError> {
        self.table(&align_scores(scores)?, scores)
    }

    /// Reasoning in the fixed taxonomy order.
    pub fn reasoning_sections(&self, result: &AnalysisResult) -> Vec<ReasoningSection> {
        let reasoning = &result.reasoning;
        ReasoningKey::ALL
            .iter()
            .map(|key| {
                let body = match key {
                    ReasoningKey::Decomposition => &reasoning.decomposition,
                    ReasoningKey::Assumptions => &reasoning.assumptions,
                    ReasoningKey::Tradeoffs => &reasoning.tradeoffs,
                    ReasoningKey::Risks => &reasoning.risks,
                    ReasoningKey::Sensitivity => &reasoning.sensitivity,
                };
                ReasoningSection {
                    key: *key,
                    title: key.title().to_string(),
                    body: body.clone(),
                }
            })
            .collect()
    }

    fn radar(&self, aligned: &AlignedScores) -> RadarChart {
        RadarChart {
            axes: aligned.axes.clone(),
            series: aligned
                .rows
                .iter()
                .map(|row| RadarSeries {
                    option_id: row.option_id.clone(),
                    option_label: row.option_label.clone(),
                    values: row.values.clone(),
                })
                .collect(),
        }
    }

    fn table(
        &self,
        aligned: &AlignedScores,
        scores: &[OptionScore],
    ) -> Result<ScoreTable, AnalysisError> {
        let max = ScoreAggregator::rank_options(scores)?.max_total();

        let mut columns: Vec<String> =
            aligned.axes.iter().map(|a| a.criterion_name.clone()).collect();
        columns.push("Total".to_string());

        let rows = aligned
            .rows
            .iter()
            .map(|row| ScoreRow {
                option_id: row.option_id.clone(),
                option_label: row.option_label.clone(),
                cells: aligned
                    .axes
                    .iter()
                    .zip(&row.values)
                    .map(|(axis, score)| ScoreCell {
                        criterion_id: axis.criterion_id.clone(),
                        score: *score,
                        band: self.thresholds.band(*score),
                    })
                    .collect(),
                total_score: row.total_score,
                is_best: row.total_score == max,
            })
            .collect();

        Ok(ScoreTable { columns, rows })
    }
}

struct AlignedRow {
    option_id: String,
    option_label: String,
    values: Vec<f64>,
    total_score: f64,
}

struct AlignedScores {
    axes: Vec<RadarAxis>,
    rows: Vec<AlignedRow>,
}

impl AnalysisResult {
    /// Checks the score shape every view depends on: at least one option,
    /// all scored on the same criteria.
    pub fn ensure_renderable(&self) -> Result<(), AnalysisError> {
        ScoreAggregator::rank_options(&self.scores)?;
        align_scores(&self.scores).map(|_| ())
    }
}

/// Lines every option's scores up with the first option's criteria.
fn align_scores(scores: &[OptionScore]) -> Result<AlignedScores, AnalysisError> {
    let first = scores.first().ok_or(AnalysisError::EmptyResultSet)?;

    let axes: Vec<RadarAxis> = first
        .criteria_scores
        .iter()
        .map(|cs| RadarAxis {
            criterion_id: cs.criterion_id.clone(),
            criterion_name: cs.criterion_name.clone(),
        })
        .collect();
    let expected: Vec<String> = axes.iter().map(|a| a.criterion_id.clone()).collect();

    let mut rows = Vec::with_capacity(scores.len());
    for option in scores {
        let by_id: HashMap<&str, f64> = option
            .criteria_scores
            .iter()
            .map(|cs| (cs.criterion_id.as_str(), cs.score))
            .collect();

        let values: Option<Vec<f64>> = expected
            .iter()
            .map(|id| by_id.get(id.as_str()).copied())
            .collect();

        match values {
            Some(values)
                if by_id.len() == expected.len()
                    && option.criteria_scores.len() == expected.len() =>
            {
                rows.push(AlignedRow {
                    option_id: option.option_id.clone(),
                    option_label: option.option_label.clone(),
                    values,
                    total_score: option.total_score,
                });
            }
            _ => {
                return Err(AnalysisError::CriteriaMismatch {
                    option_id: option.option_id.clone(),
                    expected,
                    found: option
                        .criteria_scores
                        .iter()
                        .map(|cs| cs.criterion_id.clone())
                        .collect(),
                });
            }
        }
    }

    Ok(AlignedScores { axes, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{CriterionScore, Reasoning};

    fn cs(id: &str, name: &str, score: f64) -> CriterionScore {
        CriterionScore {
            criterion_id: id.to_string(),
            criterion_name: name.to_string(),
            score,
        }
    }

    fn option(id: &str, label: &str, scores: Vec<CriterionScore>, total: f64) -> OptionScore {
        OptionScore {
            option_id: id.to_string(),
            option_label: label.to_string(),
            criteria_scores: scores,
            total_score: total,
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            recommendation: Recommendation {
                option_id: "3".into(),
                option_label: "Python".into(),
                confidence: 0.87,
                summary: "Python offers the best overall balance.".into(),
            },
            scores: vec![
                option(
                    "1",
                    "Rust",
                    vec![cs("1", "Job Market", 6.0), cs("2", "Learning Curve", 4.0)],
                    66.0,
                ),
                option(
                    "2",
                    "Go",
                    vec![cs("1", "Job Market", 7.0), cs("2", "Learning Curve", 7.0)],
                    70.0,
                ),
                option(
                    "3",
                    "Python",
                    vec![cs("1", "Job Market", 9.0), cs("2", "Learning Curve", 9.0)],
                    94.0,
                ),
            ],
            reasoning: Reasoning {
                decomposition: "Two dimensions".into(),
                assumptions: vec!["3 months".to_string()].into(),
                tradeoffs: vec!["Speed vs ease".to_string()].into(),
                risks: ReasoningContent::Bullets(vec![]),
                sensitivity: "Stable".into(),
            },
        }
    }

    #[test]
    fn default_thresholds_band_scores() {
        let t = ScoreThresholds::default();
        assert_eq!(t.band(8.0), ScoreBand::High);
        assert_eq!(t.band(7.9), ScoreBand::Medium);
        assert_eq!(t.band(5.0), ScoreBand::Medium);
        assert_eq!(t.band(4.0), ScoreBand::Low);
    }

    #[test]
    fn custom_thresholds_change_bands_only() {
        let renderer = ResultRenderer::new(ScoreThresholds::new(9.5, 7.0));
        let table = renderer.score_table(&sample_result().scores).unwrap();
        let python = &table.rows[2];
        assert_eq!(python.cells[0].band, ScoreBand::Medium);
        assert_eq!(python.total_score, 94.0);
    }

    #[test]
    fn radar_has_axis_per_criterion_and_series_per_option() {
        let radar = ResultRenderer::default()
            .radar_chart(&sample_result().scores)
            .unwrap();
        assert_eq!(radar.axes.len(), 2);
        assert_eq!(radar.axes[1].criterion_name, "Learning Curve");
        assert_eq!(radar.series.len(), 3);
        assert_eq!(radar.series[2].values, vec![9.0, 9.0]);
    }

    #[test]
    fn radar_matches_scores_by_criterion_id_not_position() {
        let scores = vec![
            option("a", "A", vec![cs("1", "Cost", 2.0), cs("2", "Speed", 8.0)], 50.0),
            option("b", "B", vec![cs("2", "Speed", 3.0), cs("1", "Cost", 9.0)], 60.0),
        ];
        let radar = ResultRenderer::default().radar_chart(&scores).unwrap();
        assert_eq!(radar.series[1].values, vec![9.0, 3.0]);
    }

    #[test]
    fn mismatched_criteria_are_rejected() {
        let scores = vec![
            option("a", "A", vec![cs("1", "Cost", 2.0), cs("2", "Speed", 8.0)], 50.0),
            option("b", "B", vec![cs("1", "Cost", 9.0), cs("3", "Risk", 3.0)], 60.0),
        ];
        let err = ResultRenderer::default().radar_chart(&scores).unwrap_err();
        assert!(
            matches!(err, AnalysisError::CriteriaMismatch { option_id, .. } if option_id == "b")
        );
    }

    #[test]
    fn extra_criterion_is_rejected() {
        let scores = vec![
            option("a", "A", vec![cs("1", "Cost", 2.0)], 50.0),
            option("b", "B", vec![cs("1", "Cost", 9.0), cs("2", "Speed", 3.0)], 60.0),
        ];
        assert!(ResultRenderer::default().score_table(&scores).is_err());
    }

    #[test]
    fn renderable_check_catches_empty_and_misaligned_scores() {
        let mut result = sample_result();
        assert!(result.ensure_renderable().is_ok());

        result.scores[1].criteria_scores.pop();
        assert!(matches!(
            result.ensure_renderable(),
            Err(AnalysisError::CriteriaMismatch { .. })
        ));

        result.scores.clear();
        assert!(matches!(
            result.ensure_renderable(),
            Err(AnalysisError::EmptyResultSet)
        ));
    }

    #[test]
    fn bars_flag_the_maximum() {
        let bars = ResultRenderer::default().bars(&sample_result().scores).unwrap();
        let flagged: Vec<&str> = bars
            .iter()
            .filter(|b| b.highlighted)
            .map(|b| b.option_label.as_str())
            .collect();
        assert_eq!(flagged, vec!["Python"]);
    }

    #[test]
    fn table_has_criteria_plus_total_columns() {
        let table = ResultRenderer::default()
            .score_table(&sample_result().scores)
            .unwrap();
        assert_eq!(table.columns, vec!["Job Market", "Learning Curve", "Total"]);
        assert!(table.rows[2].is_best);
        assert!(!table.rows[0].is_best);
        assert_eq!(table.rows[0].cells[1].band, ScoreBand::Low);
    }

    #[test]
    fn reasoning_sections_follow_taxonomy() {
        let sections = ResultRenderer::default().reasoning_sections(&sample_result());
        let keys: Vec<ReasoningKey> = sections.iter().map(|s| s.key).collect();
        assert_eq!(keys, ReasoningKey::ALL.to_vec());
        assert!(matches!(sections[0].body, ReasoningContent::Paragraph(_)));
        assert!(matches!(sections[1].body, ReasoningContent::Bullets(_)));
        assert_eq!(sections[3].title, "Potential Risks");
    }

    #[test]
    fn render_of_empty_scores_is_empty_result_set() {
        let mut result = sample_result();
        result.scores.clear();
        assert_eq!(
            ResultRenderer::default().render(&result).unwrap_err(),
            AnalysisError::EmptyResultSet
        );
    }

    #[test]
    fn render_value_reports_missing_reasoning_keys() {
        let mut value = serde_json::to_value(sample_result()).unwrap();
        value["reasoning"].as_object_mut().unwrap().remove("risks");
        let err = ResultRenderer::default().render_value(value).unwrap_err();
        assert!(matches!(err, AnalysisError::Malformed(_)));
    }

    #[test]
    fn render_builds_recommendation_view() {
        let rendered = ResultRenderer::default().render(&sample_result()).unwrap();
        assert_eq!(rendered.recommendation.confidence_percent, 87);
        assert_eq!(rendered.bars.len(), 3);
        assert_eq!(rendered.reasoning.len(), 5);
    }
}
