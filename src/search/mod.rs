//! Nearest-word search over a [`WordList`].
//!
//! The scan walks the list in order, skips words whose length differs from
//! the probe by more than [`SearchOptions::max_length_difference`], scores the
//! rest with a [`DistanceMetric`], and keeps the first word that reaches the
//! smallest distance. An exact match (distance 0) ends the scan immediately.

use tracing::debug;

use crate::dictionary::WordList;
use crate::distance::{DistanceMetric, DistanceVariant};

/// Default length-difference bound for the pruning filter.
pub const DEFAULT_MAX_LENGTH_DIFFERENCE: usize = 3;

/// Tuning for the candidate scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Words whose length differs from the probe by more than this are
    /// skipped without computing a distance.
    pub max_length_difference: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_length_difference: DEFAULT_MAX_LENGTH_DIFFERENCE,
        }
    }
}

/// Result of a best-match query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The closest word and its distance from the probe.
    Found {
        /// Closest word, first in list order on ties.
        word: String,
        /// Edit distance between the probe and `word`.
        distance: usize,
    },
    /// The list was empty or every word was pruned.
    NoCandidate,
}

impl MatchOutcome {
    /// Closest word, or `""` when there was no candidate.
    pub fn word(&self) -> &str {
        match self {
            MatchOutcome::Found { word, .. } => word,
            MatchOutcome::NoCandidate => "",
        }
    }

    /// Best distance, or `None` (unbounded) when there was no candidate.
    pub fn distance(&self) -> Option<usize> {
        match self {
            MatchOutcome::Found { distance, .. } => Some(*distance),
            MatchOutcome::NoCandidate => None,
        }
    }

    /// Whether no word was scored.
    pub fn is_no_candidate(&self) -> bool {
        matches!(self, MatchOutcome::NoCandidate)
    }
}

/// Serialized as `{ "word": ..., "distance": ... }`; `distance` is `null`
/// and `word` is empty for [`MatchOutcome::NoCandidate`].
impl serde::Serialize for MatchOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MatchOutcome", 2)?;
        state.serialize_field("word", self.word())?;
        state.serialize_field("distance", &self.distance())?;
        state.end()
    }
}

/// Counters from a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ScanStats {
    evaluated: usize,
    pruned: usize,
    exact: bool,
}

/// Linear nearest-word search with a length-based pruning filter.
///
/// The word list is shared and read-only; each query owns its own
/// accumulator, so one `CandidateSearch` can serve any number of queries.
///
/// # Example
///
/// ```rust
/// use nearword::dictionary::WordList;
/// use nearword::distance::DistanceVariant;
/// use nearword::search::CandidateSearch;
///
/// let words = WordList::from_terms(["kucing", "kuda", "kancil"]);
/// let search = CandidateSearch::new(words, DistanceVariant::Iterative);
///
/// let outcome = search.best_match("kucang");
/// assert_eq!(outcome.word(), "kucing");
/// assert_eq!(outcome.distance(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct CandidateSearch<M = DistanceVariant> {
    words: WordList,
    metric: M,
    options: SearchOptions,
}

impl<M: DistanceMetric> CandidateSearch<M> {
    /// Create a search over `words` scored by `metric`, with default options.
    pub fn new(words: WordList, metric: M) -> Self {
        Self::with_options(words, metric, SearchOptions::default())
    }

    /// Create a search with explicit options.
    pub fn with_options(words: WordList, metric: M, options: SearchOptions) -> Self {
        Self {
            words,
            metric,
            options,
        }
    }

    /// The word list being searched.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The metric used to score candidates.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Active options.
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Find the closest word to `probe`.
    pub fn best_match(&self, probe: &str) -> MatchOutcome {
        let (best, stats) = self.scan(probe);
        debug!(
            probe_len = probe.chars().count(),
            evaluated = stats.evaluated,
            pruned = stats.pruned,
            exact = stats.exact,
            "best-match scan complete"
        );

        match best {
            Some((index, distance)) => MatchOutcome::Found {
                word: self.words.as_slice()[index].clone(),
                distance,
            },
            None => MatchOutcome::NoCandidate,
        }
    }

    /// Smallest distance from `probe` to any unpruned word.
    ///
    /// Same scan as [`best_match`](Self::best_match) without materializing
    /// the word; this is the form the benchmark harness times.
    pub fn min_distance(&self, probe: &str) -> Option<usize> {
        self.scan(probe).0.map(|(_, distance)| distance)
    }

    fn scan(&self, probe: &str) -> (Option<(usize, usize)>, ScanStats) {
        let probe_len = probe.chars().count();
        let mut stats = ScanStats::default();
        let mut best: Option<(usize, usize)> = None;

        for (index, word) in self.words.iter().enumerate() {
            if word.chars().count().abs_diff(probe_len) > self.options.max_length_difference {
                stats.pruned += 1;
                continue;
            }

            let distance = self.metric.distance(probe, word);
            stats.evaluated += 1;

            if best.map_or(true, |(_, current)| distance < current) {
                best = Some((index, distance));
            }

            if distance == 0 {
                stats.exact = true;
                break;
            }
        }

        (best, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn words(terms: &[&str]) -> WordList {
        WordList::from_terms(terms.iter().copied())
    }

    #[test]
    fn test_best_match_basic() {
        let search = CandidateSearch::new(
            words(&["makan", "minum", "mandi"]),
            DistanceVariant::Iterative,
        );
        let outcome = search.best_match("makam");
        assert_eq!(outcome.word(), "makan");
        assert_eq!(outcome.distance(), Some(1));
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let search = CandidateSearch::new(words(&["bata", "batu", "bati"]), DistanceVariant::Iterative);
        let outcome = search.best_match("bat");
        assert_eq!(outcome.word(), "bata");
        assert_eq!(outcome.distance(), Some(1));
    }

    #[test]
    fn test_empty_list_is_no_candidate() {
        for variant in DistanceVariant::ALL {
            let search = CandidateSearch::new(WordList::default(), variant);
            assert_eq!(search.best_match("apa"), MatchOutcome::NoCandidate);
            assert_eq!(search.min_distance("apa"), None);
        }
    }

    #[test]
    fn test_all_pruned_skips_metric() {
        let calls = Cell::new(0);
        let metric = |a: &str, b: &str| {
            calls.set(calls.get() + 1);
            crate::distance::iterative_distance(a, b)
        };
        let search = CandidateSearch::new(words(&["abcde"]), metric);

        let outcome = search.best_match("a");
        assert!(outcome.is_no_candidate());
        assert_eq!(outcome.word(), "");
        assert_eq!(outcome.distance(), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_prune_bound_is_inclusive() {
        // length difference exactly 3 is still scored
        let search = CandidateSearch::new(words(&["abcd"]), DistanceVariant::Iterative);
        assert_eq!(search.min_distance("a"), Some(3));
    }

    #[test]
    fn test_prune_counts_astral_characters_once() {
        // four emoji are four units (sixteen bytes), so the difference to "a" is 3
        let search = CandidateSearch::new(words(&["😀😀😀😀"]), DistanceVariant::Iterative);
        assert_eq!(search.min_distance("a"), Some(4));
    }

    #[test]
    fn test_exact_match_stops_scan() {
        let seen = std::cell::RefCell::new(Vec::new());
        let metric = |a: &str, b: &str| {
            seen.borrow_mut().push(b.to_string());
            crate::distance::iterative_distance(a, b)
        };
        let search = CandidateSearch::new(words(&["apple", "aple", "xyz"]), metric);

        let outcome = search.best_match("apple");
        assert_eq!(
            outcome,
            MatchOutcome::Found {
                word: "apple".to_string(),
                distance: 0
            }
        );
        assert_eq!(*seen.borrow(), vec!["apple".to_string()]);
    }

    #[test]
    fn test_empty_probe_scores_by_word_length() {
        let search = CandidateSearch::new(words(&["abcd", "ab", "abc"]), DistanceVariant::Iterative);
        let outcome = search.best_match("");
        assert_eq!(outcome.word(), "ab");
        assert_eq!(outcome.distance(), Some(2));
    }

    #[test]
    fn test_custom_prune_bound() {
        let options = SearchOptions {
            max_length_difference: 0,
        };
        let search =
            CandidateSearch::with_options(words(&["kat", "kata"]), DistanceVariant::Iterative, options);
        assert_eq!(search.best_match("kita").word(), "kata");
    }

    #[test]
    fn test_serialize_outcome() {
        let found = MatchOutcome::Found {
            word: "buku".to_string(),
            distance: 2,
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"word":"buku","distance":2}"#
        );
        assert_eq!(
            serde_json::to_string(&MatchOutcome::NoCandidate).unwrap(),
            r#"{"word":"","distance":null}"#
        );
    }
}
