// file: src/search/fuzzy.rs
// description: word-level fuzzy matching on Levenshtein edit distance
// reference: https://docs.rs/strsim

use strsim::levenshtein;

/// Maximum tolerated edit distance for a query word: 20% of its character
/// length, floored, never below 1.
pub fn edit_threshold(word_len: usize) -> usize {
    (((word_len as f64) * 0.2).floor() as usize).max(1)
}

/// A query word fuzzily matches a title word when the edit distance fits the
/// threshold and the words are not identical. Identical words are already
/// rewarded by the substring and keyword weights.
pub fn words_match(query_word: &str, title_word: &str) -> bool {
    if query_word == title_word {
        return false;
    }
    levenshtein(query_word, title_word) <= edit_threshold(query_word.chars().count())
}

/// Count of query words (length > 2) that fuzzily match some word of `name`.
/// The first matching title word wins per query word. Both inputs must
/// already be lowercased.
pub fn matching_query_words(query: &str, name: &str) -> usize {
    let name_words: Vec<&str> = name.split_whitespace().collect();
    query
        .split_whitespace()
        .filter(|qw| qw.chars().count() > 2)
        .filter(|qw| name_words.iter().any(|tw| words_match(qw, tw)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_levenshtein_reference_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn test_edit_threshold() {
        assert_eq!(edit_threshold(3), 1);
        assert_eq!(edit_threshold(7), 1);
        assert_eq!(edit_threshold(10), 2);
        assert_eq!(edit_threshold(0), 1);
    }

    #[test]
    fn test_typo_within_threshold_matches() {
        // distance 1, threshold max(1, floor(7 * 0.2)) = 1
        assert!(words_match("floursh", "flourish"));
        assert!(!words_match("xyz", "flourish"));
    }

    #[test]
    fn test_identical_words_do_not_match() {
        assert!(!words_match("neon", "neon"));
    }

    #[test]
    fn test_matching_query_words_counts_once_per_query_word() {
        // "neon" is identical to a title word, "dreems" is one edit away
        assert_eq!(matching_query_words("neon dreems", "neon dreams"), 1);
        // short words are skipped entirely
        assert_eq!(matching_query_words("ne on", "neon dreams"), 0);
    }
}
