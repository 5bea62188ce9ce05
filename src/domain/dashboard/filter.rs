//! Dashboard search and status filter.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;
use crate::domain::foundation::DecisionStatus;

/// Title search plus status selection.
///
/// An empty status set matches every status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionFilter {
    pub query: String,
    pub statuses: HashSet<DecisionStatus>,
}

impl DecisionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: DecisionStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    /// Adds `status` if absent, removes it otherwise.
    pub fn toggle_status(&mut self, status: DecisionStatus) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
    }

    /// Case-insensitive title substring match and status membership.
    pub fn matches(&self, decision: &Decision) -> bool {
        let query = self.query.to_lowercase();
        let title_matches = decision.title().to_lowercase().contains(&query);
        let status_matches = self.statuses.is_empty() || self.statuses.contains(&decision.status);
        title_matches && status_matches
    }
}

/// Number of decisions in each status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    counts: BTreeMap<&'static str, usize>,
    total: usize,
}

impl StatusCounts {
    pub fn tally<'a>(decisions: impl IntoIterator<Item = &'a Decision>) -> Self {
        let mut counts = Self::default();
        for decision in decisions {
            *counts.counts.entry(decision.status.as_str()).or_insert(0) += 1;
            counts.total += 1;
        }
        counts
    }

    pub fn get(&self, status: DecisionStatus) -> usize {
        self.counts.get(status.as_str()).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
