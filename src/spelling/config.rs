//! Configuration for suggestion ranking.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};

/// Configuration for the suggestion ranker.
///
/// The threshold is kept signed so that values coming from JSON files or the
/// command line can be checked instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Maximum edit distance for a word to qualify.
    pub threshold: i64,

    /// Return just the query when it is itself a dictionary word.
    pub stop_on_exact_match: bool,

    /// Maximum number of suggestions to return.
    /// If None, every qualifying word is returned.
    pub max_suggestions: Option<usize>,

    /// Whether to spread the dictionary scan over the rayon thread pool.
    pub parallel: bool,

    /// Dictionaries smaller than this are always scanned sequentially.
    pub parallel_min_words: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            threshold: 2,
            stop_on_exact_match: false,
            max_suggestions: None,
            parallel: true,
            parallel_min_words: 4096,
        }
    }
}

impl RankerConfig {
    /// Create a config with the given threshold and default options.
    pub fn new(threshold: i64) -> Self {
        RankerConfig {
            threshold,
            ..Default::default()
        }
    }

    /// Set the maximum edit distance.
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable the exact-match shortcut.
    pub fn with_stop_on_exact_match(mut self, enabled: bool) -> Self {
        self.stop_on_exact_match = enabled;
        self
    }

    /// Cap the number of returned suggestions.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = Some(max_suggestions);
        self
    }

    /// Enable or disable parallel scanning.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the dictionary size from which scans go parallel.
    pub fn with_parallel_min_words(mut self, min_words: usize) -> Self {
        self.parallel_min_words = min_words;
        self
    }

    /// Check the configuration and return the threshold as an unsigned bound.
    pub fn validate(&self) -> Result<usize> {
        if self.threshold < 0 {
            return Err(AutocorrectError::invalid_config(format!(
                "threshold must not be negative, got {}",
                self.threshold
            )));
        }
        if self.max_suggestions == Some(0) {
            return Err(AutocorrectError::invalid_config(
                "max_suggestions must be at least 1",
            ));
        }

        usize::try_from(self.threshold).map_err(|_| {
            AutocorrectError::invalid_config(format!(
                "threshold {} does not fit this platform",
                self.threshold
            ))
        })
    }

    /// Parse a configuration from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
