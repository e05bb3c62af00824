pub mod counting;
pub mod ranking;
pub mod tokenizer;

use crate::document::Document;
use crate::types::histogram::{
	AnalysisError, Histogram, HistogramSource, HistogramSummary, RankedList, DEFAULT_LIMIT,
};
pub use counting::{count_tokens, FrequencyMap};
pub use ranking::{rank, rank_order, RankResult};
pub use tokenizer::{is_word_char, EmptyTokenPolicy, Tokenizer, WordTokenizer};

/// Tokenizer, counter and ranker run back to back.
#[derive(Debug, Clone)]
pub struct FrequencyAnalyzer<T> {
	tokenizer: T,
	limit: usize,
}

impl Default for FrequencyAnalyzer<WordTokenizer> {
	fn default() -> Self {
		Self {
			tokenizer: WordTokenizer::default(),
			limit: DEFAULT_LIMIT,
		}
	}
}

impl<T> FrequencyAnalyzer<T>
where
	T: Tokenizer,
{
	pub fn new(tokenizer: T, limit: usize) -> Result<Self, AnalysisError> {
		if limit == 0 {
			return Err(AnalysisError::InvalidLimit(limit));
		}
		Ok(Self { tokenizer, limit })
	}

	pub fn limit(&self) -> usize {
		self.limit
	}

	pub fn tokenizer(&self) -> &T {
		&self.tokenizer
	}

	/// Counts every token of `text`.
	pub fn count(&self, text: &str) -> FrequencyMap {
		count_tokens(self.tokenizer.tokenize(text))
	}

	/// Ranked top entries of `text`, without provenance.
	pub fn rank_text(&self, text: &str) -> RankedList {
		rank(&self.count(text), self.limit).ranked
	}

	pub fn analyze(&self, document: &Document) -> Histogram {
		// 1. Tokenize + count
		let counts = self.count(&document.content);
		let total_tokens = counts.total();

		// 2. Rank + truncate
		let RankResult {
			ranked,
			distinct_tokens,
			entries_excluded_by_limit,
		} = rank(&counts, self.limit);

		log::debug!(
			"analyzed {}: {} tokens, {} distinct, {} beyond limit {}",
			document.source,
			total_tokens,
			distinct_tokens,
			entries_excluded_by_limit,
			self.limit
		);

		let summary = HistogramSummary {
			total_tokens,
			distinct_tokens,
			entries_shown: ranked.len(),
			limit: self.limit,
		};

		Histogram {
			source: HistogramSource {
				source: document.source.clone(),
				version: document.version.clone(),
				fetched_at: document.fetched_at,
			},
			entries: ranked,
			summary,
		}
	}
}
