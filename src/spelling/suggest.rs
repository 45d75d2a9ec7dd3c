//! Spelling suggestion ranking.
//!
//! Every dictionary word is measured against the query, words further away
//! than the threshold are dropped, and the rest are ordered by edit distance
//! and then by code-point order of the word.

use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::config::RankerConfig;
use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// A dictionary word together with its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, distance: usize) -> Self {
        Suggestion {
            word: word.into(),
            distance,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closer words first, then plain string order
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ranks dictionary words by their edit distance to a query.
///
/// The ranker owns its dictionary and never modifies it, so it can be shared
/// across threads and queried any number of times.
#[derive(Debug, Clone)]
pub struct SuggestionRanker {
    dictionary: Dictionary,
    config: RankerConfig,
    threshold: usize,
}

impl SuggestionRanker {
    /// Create a ranker, rejecting invalid configurations.
    pub fn new(dictionary: Dictionary, config: RankerConfig) -> Result<Self> {
        let threshold = config.validate()?;
        debug!(
            "Ranker ready: {} words, threshold {}",
            dictionary.len(),
            threshold
        );

        Ok(SuggestionRanker {
            dictionary,
            config,
            threshold,
        })
    }

    /// Create a ranker with the given threshold and default options.
    pub fn with_threshold(dictionary: Dictionary, threshold: i64) -> Result<Self> {
        Self::new(dictionary, RankerConfig::new(threshold))
    }

    /// Ranked words within the threshold of `query`.
    pub fn rank(&self, query: &str) -> Vec<String> {
        self.suggest(query)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Ranked suggestions, with distances, within the threshold of `query`.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        if self.config.stop_on_exact_match && self.dictionary.contains(query) {
            return vec![Suggestion::new(query, 0)];
        }

        let matcher = LevenshteinMatcher::new(query);
        let mut suggestions = if self.use_parallel() {
            self.scan_parallel(&matcher)
        } else {
            self.scan(&matcher)
        };

        // (distance, word) is a total order, so an unstable sort is deterministic
        suggestions.sort_unstable();

        if let Some(max) = self.config.max_suggestions {
            suggestions.truncate(max);
        }

        debug!(
            "{} of {} words within {} of {:?}",
            suggestions.len(),
            self.dictionary.len(),
            self.threshold,
            query
        );
        suggestions
    }

    /// Check if a word exists in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// The dictionary this ranker was built with.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The validated threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    fn use_parallel(&self) -> bool {
        self.config.parallel && self.dictionary.len() >= self.config.parallel_min_words
    }

    fn scan(&self, matcher: &LevenshteinMatcher) -> Vec<Suggestion> {
        self.dictionary
            .words()
            .iter()
            .filter_map(|word| self.measure(matcher, word))
            .collect()
    }

    fn scan_parallel(&self, matcher: &LevenshteinMatcher) -> Vec<Suggestion> {
        self.dictionary
            .words()
            .par_iter()
            .filter_map(|word| self.measure(matcher, word))
            .collect()
    }

    fn measure(&self, matcher: &LevenshteinMatcher, word: &str) -> Option<Suggestion> {
        matcher
            .distance_within(word, self.threshold)
            .map(|distance| Suggestion::new(word, distance))
    }
}
