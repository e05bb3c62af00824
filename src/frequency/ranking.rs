use std::cmp::Ordering;

use crate::frequency::counting::FrequencyMap;
use crate::types::histogram::{RankedEntry, RankedList};

/// Total order of the ranked output: count descending, token ascending.
pub fn rank_order(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.token.cmp(&b.token))
}

pub struct RankResult {
    pub ranked: RankedList,
    pub distinct_tokens: usize,
    pub entries_excluded_by_limit: usize,
}

/// Sorts every entry of `counts` and keeps the first `limit`.
///
/// Callers validate `limit`; a zero limit simply yields an empty list here.
pub fn rank(counts: &FrequencyMap, limit: usize) -> RankResult {
    let mut entries: Vec<RankedEntry> = counts
        .iter()
        .map(|(token, count)| RankedEntry::new(token, count))
        .collect();

    // Keys are unique, so the order is total and an unstable sort is deterministic.
    entries.sort_unstable_by(rank_order);

    let distinct_tokens = entries.len();
    entries.truncate(limit);
    let entries_excluded_by_limit = distinct_tokens - entries.len();

    RankResult {
        ranked: RankedList::from_sorted(entries),
        distinct_tokens,
        entries_excluded_by_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::counting::count_tokens;

    #[test]
    fn ties_break_on_token_ascending() {
        let counts = count_tokens(["b", "a", "c", "b", "a"]);
        let result = rank(&counts, 20);
        let pairs: Vec<(&str, usize)> = result
            .ranked
            .iter()
            .map(|e| (e.token.as_str(), e.count))
            .collect();
        assert_eq!(pairs, vec![("a", 2), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn truncates_to_limit_and_reports_excluded() {
        let counts = count_tokens(["a", "b", "c", "d"]);
        let result = rank(&counts, 3);
        assert_eq!(result.ranked.len(), 3);
        assert_eq!(result.distinct_tokens, 4);
        assert_eq!(result.entries_excluded_by_limit, 1);
    }
}
