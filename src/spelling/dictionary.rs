//! Dictionary management for spelling correction.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};

/// On-disk layout of a word-list file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    /// One word per line.
    Plain,
    /// First line holds the word count `n`, followed by `n` word lines.
    Counted,
    /// `Counted` when the first line parses as a count, `Plain` otherwise.
    #[default]
    Auto,
}

/// The fixed reference set of accepted words.
///
/// Words keep their source order and duplicates are preserved. The dictionary
/// is immutable once built; rankers borrow it read-only.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Words in source order
    words: Vec<String>,
    /// Set of all words for fast membership checks
    word_set: HashSet<String>,
}

impl Dictionary {
    /// Create a dictionary from a list of words.
    pub fn new(words: Vec<String>) -> Self {
        let word_set = words.iter().cloned().collect();
        Dictionary { words, word_set }
    }

    /// All words, in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if a word exists in the dictionary. Comparison is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Load a dictionary in the given format.
    pub fn load<P: AsRef<Path>>(path: P, format: DictionaryFormat) -> Result<Self> {
        let path = path.as_ref();
        let lines = read_lines(path)?;

        let format = match format {
            DictionaryFormat::Auto => {
                let detected = detect_format(&lines);
                if detected == DictionaryFormat::Counted {
                    warn!(
                        "{}: first line {:?} read as a word count; use the plain format if it is a word",
                        path.display(),
                        lines[0].trim()
                    );
                }
                detected
            }
            other => other,
        };
        debug!("Reading {} as {:?} word list", path.display(), format);

        let dictionary = match format {
            DictionaryFormat::Counted => Self::from_counted_lines(lines)?,
            _ => Self::from_plain_lines(lines),
        };

        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Load dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path, DictionaryFormat::Plain)
    }

    /// Load dictionary from a file whose first line is the number of words that follow.
    pub fn load_counted_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path, DictionaryFormat::Counted)
    }

    fn from_plain_lines(lines: Vec<String>) -> Self {
        lines
            .into_iter()
            .filter_map(|line| {
                let word = line.trim();
                (!word.is_empty()).then(|| word.to_string())
            })
            .collect()
    }

    fn from_counted_lines(lines: Vec<String>) -> Result<Self> {
        let mut lines = lines.into_iter();
        let header = lines
            .next()
            .ok_or_else(|| AutocorrectError::dictionary("empty file, expected a word count"))?;
        let count: usize = header.trim().parse().map_err(|_| {
            AutocorrectError::dictionary(format!("invalid word count header: {:?}", header.trim()))
        })?;

        let mut words = Vec::with_capacity(count);
        for (index, line) in lines.take(count).enumerate() {
            let word = line.trim();
            // Blank lines would count toward the header and load as ""
            if word.is_empty() {
                return Err(AutocorrectError::dictionary(format!(
                    "blank line at word {} of {}",
                    index + 1,
                    count
                )));
            }
            words.push(word.to_string());
        }

        if words.len() < count {
            return Err(AutocorrectError::dictionary(format!(
                "header announces {} words but only {} follow",
                count,
                words.len()
            )));
        }

        Ok(Dictionary::new(words))
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::new(iter.into_iter().map(Into::into).collect())
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

fn detect_format(lines: &[String]) -> DictionaryFormat {
    match lines.first() {
        Some(first) if first.trim().parse::<usize>().is_ok() => DictionaryFormat::Counted,
        _ => DictionaryFormat::Plain,
    }
}
