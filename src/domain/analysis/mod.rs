//! Analysis Module - consuming the external analysis result.
//!
//! The recommendation itself is computed elsewhere. This module only ranks
//! the carried totals and shapes the result for display.
//!
//! # Components
//!
//! - `AnalysisResult` - Recommendation, per-option scores, reasoning
//! - `ScoreAggregator` - Stable descending ranking by total score
//! - `ResultRenderer` - Radar, bar, table and reasoning views

mod aggregator;
mod errors;
mod renderer;
mod result;

pub use aggregator::{RankedScores, ScoreAggregator};
pub use errors::AnalysisError;
pub use renderer::{
    BarEntry, RadarAxis, RadarChart, RadarSeries, ReasoningKey, ReasoningSection,
    RecommendationView, RenderedResult, ResultRenderer, ScoreBand, ScoreCell, ScoreRow,
    ScoreTable, ScoreThresholds,
};
pub use result::{
    AnalysisResult, CriterionScore, OptionScore, Reasoning, ReasoningContent, Recommendation,
};
