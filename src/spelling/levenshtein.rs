//! Levenshtein distance calculation for spelling correction.
//!
//! Strings are compared `char` by `char` with no normalization, so `"é"` as a
//! single code point and `"e\u{301}"` are different words.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
///
/// The distance to an empty string is the other string's length.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    // (len1 + 1) x (len2 + 1) table
    let mut distances = vec![vec![0; len2 + 1]; len1 + 1];

    // Row 0 and column 0 are the cost of pure insertions/deletions
    for i in 0..=len1 {
        distances[i][0] = i;
    }
    for j in 0..=len2 {
        distances[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            distances[i][j] = if s1_chars[i - 1] == s2_chars[j - 1] {
                distances[i - 1][j - 1]
            } else {
                1 + min(
                    min(
                        distances[i - 1][j], // deletion
                        distances[i][j - 1], // insertion
                    ),
                    distances[i - 1][j - 1], // substitution
                )
            };
        }
    }

    distances[len1][len2]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold, which can be more efficient
/// for filtering candidates.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    bounded_distance(&s1_chars, &s2_chars, threshold)
}

/// Two-row dynamic programming over pre-decoded characters.
///
/// The shorter sequence sizes the rows, so memory is O(min(len1, len2)).
fn bounded_distance(a: &[char], b: &[char], threshold: usize) -> Option<usize> {
    // Distance is symmetric; keep `b` as the shorter side.
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };

    if a.len() - b.len() > threshold {
        return None;
    }
    if b.is_empty() {
        return Some(a.len());
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &cb) in b.iter().enumerate() {
            curr_row[j + 1] = if ca == cb {
                prev_row[j]
            } else {
                1 + min(
                    min(
                        prev_row[j + 1], // deletion
                        curr_row[j],     // insertion
                    ),
                    prev_row[j], // substitution
                )
            };
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Cells never decrease along a path, so a row entirely above the
        // threshold cannot lead back under it.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[b.len()];
    (distance <= threshold).then_some(distance)
}

/// Matcher that decodes a query once and measures it against many candidates.
///
/// A ranking pass compares one query with every dictionary word, so the
/// query's characters are kept instead of being re-decoded per candidate.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of characters in the query.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        let bound = self.query_chars.len() + candidate_chars.len();
        bounded_distance(&self.query_chars, &candidate_chars, bound).unwrap_or(bound)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_within(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        bounded_distance(&self.query_chars, &candidate_chars, threshold)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_within(candidate, max_distance).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 10] = [
        "", "a", "ab", "abc", "kitten", "sitting", "search", "serach", "naïve", "日本語",
    ];

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition
    }

    #[test]
    fn test_empty_side_is_length_of_other() {
        assert_eq!(levenshtein_distance("", "kitten"), 6);
        assert_eq!(levenshtein_distance("kitten", ""), 6);
        assert_eq!(levenshtein_distance_threshold("", "kitten", 6), Some(6));
        assert_eq!(levenshtein_distance_threshold("kitten", "", 5), None);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("naïve", "naive"), 1);
        assert_eq!(levenshtein_distance("", "日本語"), 3);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_distance_properties() {
        for s in WORDS {
            assert_eq!(levenshtein_distance(s, s), 0, "identity for {s:?}");
            for t in WORDS {
                let d = levenshtein_distance(s, t);
                assert_eq!(d, levenshtein_distance(t, s), "symmetry for {s:?}/{t:?}");
                assert!(d <= s.chars().count() + t.chars().count());
            }
        }
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(
            levenshtein_distance_threshold("search", "search", 0),
            Some(0)
        );
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
    }

    #[test]
    fn test_threshold_agrees_with_full_table() {
        for s in WORDS {
            for t in WORDS {
                let full = levenshtein_distance(s, t);
                for threshold in 0..8 {
                    let bounded = levenshtein_distance_threshold(s, t, threshold);
                    if full <= threshold {
                        assert_eq!(bounded, Some(full), "{s:?}/{t:?} within {threshold}");
                    } else {
                        assert_eq!(bounded, None, "{s:?}/{t:?} within {threshold}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_levenshtein_matcher() {
        let matcher = LevenshteinMatcher::new("search");

        assert_eq!(matcher.query(), "search");
        assert_eq!(matcher.query_len(), 6);
        assert_eq!(matcher.distance("search"), 0);
        assert_eq!(matcher.distance("serach"), 2);
        assert_eq!(matcher.distance(""), 6);
        assert!(matcher.is_match("serach", 2));
        assert!(!matcher.is_match("completely_different", 2));
        assert_eq!(matcher.distance_within("searching", 3), Some(3));
    }

    #[test]
    fn test_matcher_agrees_with_free_function() {
        for s in WORDS {
            let matcher = LevenshteinMatcher::new(s);
            for t in WORDS {
                assert_eq!(matcher.distance(t), levenshtein_distance(s, t));
            }
        }
    }
}
