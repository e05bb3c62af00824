use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentVersion;

/// Number of entries kept by the ranker unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 20;

/// A single `(token, count)` pair of the ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

/// Tokens ordered by count descending, then token ascending.
///
/// Only the ranker builds these, so the ordering and the length bound hold
/// for every value observed outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    pub(crate) fn from_sorted(entries: Vec<RankedEntry>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| {
                let a = &w[0];
                let b = &w[1];
                a.count > b.count || (a.count == b.count && a.token <= b.token)
            }),
            "ranked entries must be sorted by (count desc, token asc)"
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest count in the list, used to scale chart bars.
    pub fn max_count(&self) -> usize {
        self.entries.first().map(|e| e.count).unwrap_or(0)
    }

    pub fn into_vec(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Where the analyzed text came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSource {
    pub source: String,
    pub version: DocumentVersion,
    pub fetched_at: DateTime<Utc>,
}

/// Counts describing the run that produced the entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub entries_shown: usize,
    pub limit: usize,
}

/// The final result of one fetch-and-compute run.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub source: HistogramSource,
    pub entries: RankedList,
    pub summary: HistogramSummary,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(usize),
}
