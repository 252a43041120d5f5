// file: src/search/suggest.rs
// description: "did you mean" suggestion generation from corpus titles
// reference: internal ranking logic

use crate::models::Corpus;

/// Collects up to `limit` suggestion words from every title and model name in
/// the corpus: words longer than 3 characters containing the whole query, and
/// words that extend (start with, but do not equal) a query word longer than
/// 2 characters. Insertion order, first-seen wins.
pub fn suggestions(corpus: &Corpus, query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let query_words: Vec<&str> = query
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();

    let mut found: Vec<String> = Vec::new();

    for name in corpus.display_names() {
        let lowered = name.to_lowercase();
        for word in lowered.split_whitespace() {
            if word.chars().count() > 3 && word.contains(query) {
                push_unique(&mut found, word);
            }
            for query_word in &query_words {
                if word.starts_with(query_word) && word != *query_word {
                    push_unique(&mut found, word);
                }
            }
            if found.len() >= limit {
                return found;
            }
        }
    }

    found
}

fn push_unique(found: &mut Vec<String>, word: &str) {
    if !found.iter().any(|f| f == word) {
        found.push(word.to_string());
    }
}
