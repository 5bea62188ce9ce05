//! Score Aggregator - ranks option scores by their carried totals.

use super::{AnalysisError, OptionScore};

/// Options in descending total order plus the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScores {
    pub ranked: Vec<OptionScore>,
    pub best: OptionScore,
}

impl RankedScores {
    /// Highest total score.
    pub fn max_total(&self) -> f64 {
        self.best.total_score
    }
}

/// Ranking functions over externally computed scores.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Ranks options by `total_score`, highest first.
    ///
    /// The sort is stable, so equal totals keep their original order and the
    /// earliest of them is `best`. Totals are trusted as given.
    ///
    /// # Errors
    ///
    /// `EmptyResultSet` if `scores` is empty.
    pub fn rank_options(scores: &[OptionScore]) -> Result<RankedScores, AnalysisError> {
        if scores.is_empty() {
            return Err(AnalysisError::EmptyResultSet);
        }

        let mut ranked = scores.to_vec();
        ranked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        let best = ranked[0].clone();

        Ok(RankedScores { ranked, best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::CriterionScore;
    use proptest::prelude::*;

    fn score(id: &str, total: f64) -> OptionScore {
        OptionScore {
            option_id: id.to_string(),
            option_label: id.to_string(),
            criteria_scores: vec![],
            total_score: total,
        }
    }

    fn ids(scores: &[OptionScore]) -> Vec<&str> {
        scores.iter().map(|s| s.option_id.as_str()).collect()
    }

    #[test]
    fn ranks_descending_by_total() {
        let result =
            ScoreAggregator::rank_options(&[score("A", 70.0), score("B", 94.0), score("C", 66.0)])
                .unwrap();
        assert_eq!(ids(&result.ranked), vec!["B", "A", "C"]);
        assert_eq!(result.best.option_id, "B");
        assert_eq!(result.max_total(), 94.0);
    }

    #[test]
    fn ties_keep_original_order() {
        let result =
            ScoreAggregator::rank_options(&[score("A", 50.0), score("B", 80.0), score("C", 80.0)])
                .unwrap();
        assert_eq!(ids(&result.ranked), vec!["B", "C", "A"]);
        assert_eq!(result.best.option_id, "B");
    }

    #[test]
    fn empty_scores_signal_empty_result_set() {
        assert_eq!(
            ScoreAggregator::rank_options(&[]),
            Err(AnalysisError::EmptyResultSet)
        );
    }

    #[test]
    fn totals_are_not_recomputed() {
        let mut option = score("A", 42.5);
        option.criteria_scores.push(CriterionScore {
            criterion_id: "c".into(),
            criterion_name: "Cost".into(),
            score: 10.0,
        });
        let result = ScoreAggregator::rank_options(&[option]).unwrap();
        assert_eq!(result.best.total_score, 42.5);
    }

    proptest! {
        #[test]
        fn ranking_is_sorted_and_a_permutation(totals in proptest::collection::vec(0u32..100, 1..12)) {
            let scores: Vec<OptionScore> = totals
                .iter()
                .enumerate()
                .map(|(i, t)| score(&i.to_string(), *t as f64))
                .collect();
            let result = ScoreAggregator::rank_options(&scores).unwrap();

            prop_assert_eq!(result.ranked.len(), scores.len());
            for pair in result.ranked.windows(2) {
                prop_assert!(pair[0].total_score >= pair[1].total_score);
                if pair[0].total_score == pair[1].total_score {
                    let a: usize = pair[0].option_id.parse().unwrap();
                    let b: usize = pair[1].option_id.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
