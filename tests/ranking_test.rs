//! Integration tests for loading a word list and ranking suggestions.

use std::fs;

use autocorrect::prelude::*;
use tempfile::TempDir;

fn write_dictionary(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_rank_from_plain_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dictionary(&temp_dir, "words.txt", "xyz\nabc\nab\n");

    let dictionary = Dictionary::load_from_file(&path)?;
    let ranker = SuggestionRanker::with_threshold(dictionary, 1)?;

    assert_eq!(ranker.rank("ab"), ["ab", "abc"]);
    Ok(())
}

#[test]
fn test_rank_from_counted_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dictionary(
        &temp_dir,
        "counted.txt",
        "5\nthe\nthere\nthree\ntree\nthee\n",
    );

    let dictionary = Dictionary::load(&path, DictionaryFormat::Auto)?;
    assert_eq!(dictionary.len(), 5);

    let ranker = SuggestionRanker::with_threshold(dictionary, 1)?;
    // "tree" needs a deletion and an insertion
    assert_eq!(levenshtein_distance("thre", "tree"), 2);
    assert_eq!(ranker.rank("thre"), ["the", "thee", "there", "three"]);
    Ok(())
}

#[test]
fn test_config_file_drives_ranker() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_dictionary(
        &temp_dir,
        "ranker.json",
        r#"{"threshold": 2, "max_suggestions": 2, "parallel": false}"#,
    );

    let config = RankerConfig::from_json_file(&config_path)?;
    let dictionary: Dictionary = ["cat", "cart", "act", "dog"].into_iter().collect();
    let ranker = SuggestionRanker::new(dictionary, config)?;

    assert_eq!(ranker.rank("cat"), ["cat", "cart"]);
    Ok(())
}

#[test]
fn test_invalid_threshold_in_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_dictionary(&temp_dir, "ranker.json", r#"{"threshold": -1}"#);

    let config = RankerConfig::from_json_file(&config_path).unwrap();
    let result = SuggestionRanker::new(Dictionary::default(), config);

    assert!(matches!(
        result,
        Err(AutocorrectError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_result_is_exact_qualifying_subset() -> Result<()> {
    let words = [
        "spelling", "spell", "spilling", "selling", "swelling", "smelling", "spieling", "sapling",
        "dwelling", "spelunking",
    ];
    let dictionary: Dictionary = words.into_iter().collect();
    let ranker = SuggestionRanker::with_threshold(dictionary, 2)?;

    let suggestions = ranker.suggest("speling");

    let mut expected: Vec<(usize, &str)> = words
        .iter()
        .map(|w| (levenshtein_distance("speling", w), *w))
        .filter(|(d, _)| *d <= 2)
        .collect();
    expected.sort();

    let actual: Vec<(usize, &str)> = suggestions
        .iter()
        .map(|s| (s.distance, s.word.as_str()))
        .collect();
    assert_eq!(actual, expected);
    assert!(suggestions.len() <= words.len());
    Ok(())
}

#[test]
fn test_large_dictionary_parallel_scan() -> Result<()> {
    let words: Vec<String> = (0..10_000).map(|i| format!("term{i}")).collect();
    let dictionary = Dictionary::new(words);

    let parallel = SuggestionRanker::new(dictionary.clone(), RankerConfig::new(1))?;
    let sequential =
        SuggestionRanker::new(dictionary, RankerConfig::new(1).with_parallel(false))?;

    let ranked = parallel.rank("term42");
    assert_eq!(ranked.first().map(String::as_str), Some("term42"));
    assert_eq!(ranked, sequential.rank("term42"));
    assert_eq!(ranked, parallel.rank("term42"));
    Ok(())
}
