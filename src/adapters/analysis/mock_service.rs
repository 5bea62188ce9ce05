//! Mock Analysis Service - scripted analysis for tests and the demo binary.
//!
//! Responses are consumed in order. Once the script runs out, a
//! deterministic result is synthesized from the submitted form so the
//! wizard can always complete.
//!
//! # Example
//!
//! ```ignore
//! let service = MockAnalysisService::new()
//!     .with_error(AnalysisServiceError::unavailable("cold start"))
//!     .with_delay(Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::analysis::{
    AnalysisResult, CriterionScore, OptionScore, Reasoning, ReasoningContent, Recommendation,
    ScoreAggregator,
};
use crate::domain::decision::DecisionFormData;
use crate::ports::{AnalysisService, AnalysisServiceError, ProgressCallback};

/// Status messages emitted while a mock analysis is running.
pub const PROGRESS_MESSAGES: [&str; 6] = [
    "Analyzing your options...",
    "Evaluating criteria weights...",
    "Calculating scores...",
    "Identifying trade-offs...",
    "Assessing risks...",
    "Generating recommendation...",
];

#[derive(Debug, Clone)]
enum MockResponse {
    Success(AnalysisResult),
    Error(AnalysisServiceError),
}

/// Scripted [`AnalysisService`].
#[derive(Debug, Clone, Default)]
pub struct MockAnalysisService {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<DecisionFormData>>>,
    delay: Option<Duration>,
    silent: bool,
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful result.
    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.push(MockResponse::Success(result));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: AnalysisServiceError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Waits this long before answering. The delay is split evenly across
    /// the progress messages.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Suppresses progress messages.
    pub fn without_progress(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Number of `analyze` calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Forms received, in call order.
    pub fn received_forms(&self) -> Vec<DecisionFormData> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    fn next_response(&self) -> Option<MockResponse> {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    /// Builds a plausible result from the form alone.
    ///
    /// Scores are derived from row positions so identical forms always
    /// produce identical results.
    pub fn synthesize(form: &DecisionFormData) -> Result<AnalysisResult, AnalysisServiceError> {
        let criteria: Vec<_> = form.filled_criteria().collect();
        let total_weight: f64 = criteria.iter().map(|c| f64::from(c.weight.value())).sum();

        let scores: Vec<OptionScore> = form
            .filled_options()
            .enumerate()
            .map(|(oi, option)| {
                let criteria_scores: Vec<CriterionScore> = criteria
                    .iter()
                    .enumerate()
                    .map(|(ci, criterion)| CriterionScore {
                        criterion_id: criterion.id.clone(),
                        criterion_name: criterion.name.clone(),
                        score: ((oi * 3 + ci * 7) % 6 + 4) as f64,
                    })
                    .collect();
                let weighted: f64 = criteria_scores
                    .iter()
                    .zip(&criteria)
                    .map(|(s, c)| s.score * f64::from(c.weight.value()))
                    .sum();
                let total_score = if total_weight > 0.0 {
                    (weighted / total_weight * 10.0).round()
                } else {
                    0.0
                };
                OptionScore {
                    option_id: option.id.clone(),
                    option_label: option.label.clone(),
                    criteria_scores,
                    total_score,
                }
            })
            .collect();

        let best = ScoreAggregator::rank_options(&scores)
            .map_err(|_| AnalysisServiceError::Rejected("no options to analyze".into()))?
            .best;

        let recommendation = Recommendation {
            option_id: best.option_id.clone(),
            option_label: best.option_label.clone(),
            confidence: (best.total_score / 100.0).clamp(0.0, 1.0),
            summary: format!(
                "{} scores highest across your weighted criteria.",
                best.option_label
            ),
        };

        let reasoning = Reasoning {
            decomposition: ReasoningContent::Paragraph(format!(
                "The decision was broken into {} criteria across {} options.",
                criteria.len(),
                scores.len()
            )),
            assumptions: ReasoningContent::Bullets(
                form.constraints
                    .iter()
                    .filter(|c| !c.value.trim().is_empty())
                    .map(|c| format!("{}: {}", c.kind.label(), c.value))
                    .collect(),
            ),
            tradeoffs: ReasoningContent::Bullets(
                scores
                    .iter()
                    .filter(|s| s.option_id != best.option_id)
                    .map(|s| {
                        format!(
                            "{} trails by {} points",
                            s.option_label,
                            best.total_score - s.total_score
                        )
                    })
                    .collect(),
            ),
            risks: ReasoningContent::Bullets(Vec::new()),
            sensitivity: ReasoningContent::from("Small weight changes do not alter the ranking."),
        };

        Ok(AnalysisResult {
            recommendation,
            scores,
            reasoning,
        })
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze(
        &self,
        form: &DecisionFormData,
        on_progress: ProgressCallback<'_>,
    ) -> Result<AnalysisResult, AnalysisServiceError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(form.clone());

        let step_delay = self
            .delay
            .map(|d| d / PROGRESS_MESSAGES.len() as u32);
        for message in PROGRESS_MESSAGES {
            if !self.silent {
                on_progress(message);
            }
            if let Some(pause) = step_delay {
                tokio::time::sleep(pause).await;
            }
        }

        match self.next_response() {
            Some(MockResponse::Success(result)) => Ok(result),
            Some(MockResponse::Error(error)) => Err(error),
            None => Self::synthesize(form),
        }
    }
}
