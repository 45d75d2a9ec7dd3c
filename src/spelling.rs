//! Spelling suggestion for Autocorrect.
//!
//! This module holds the edit-distance engine, the word-list dictionary, the
//! ranker configuration, and the ranker that turns a misspelled word into an
//! ordered list of dictionary words.

pub mod config;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use config::RankerConfig;
pub use dictionary::{Dictionary, DictionaryFormat};
pub use levenshtein::{LevenshteinMatcher, levenshtein_distance, levenshtein_distance_threshold};
pub use suggest::{Suggestion, SuggestionRanker};
