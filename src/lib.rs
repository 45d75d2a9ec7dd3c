//! # Autocorrect
//!
//! Suggests dictionary words that are close to a misspelled word.
//!
//! ## Features
//!
//! - Levenshtein edit distance over Unicode scalar values
//! - Ranking by distance, then by code-point order
//! - Plain and counted word-list loaders
//! - Optional parallel scanning of large dictionaries
//!
//! ```
//! use autocorrect::prelude::*;
//!
//! let dictionary: Dictionary = ["ab", "abc", "xyz"].into_iter().collect();
//! let ranker = SuggestionRanker::with_threshold(dictionary, 1).unwrap();
//! assert_eq!(ranker.rank("ab"), ["ab", "abc"]);
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{AutocorrectError, Result};
    pub use crate::spelling::{
        Dictionary, DictionaryFormat, RankerConfig, Suggestion, SuggestionRanker,
        levenshtein_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
