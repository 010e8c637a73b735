use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // Unicode word characters: letters, marks, digits, connector punctuation.
    static ref RE: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Split text into terms, preserving their original casing.
pub fn tokenize(text: &str) -> Vec<&str> {
    RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Caseless key for a term, folded one character at a time.
///
/// Each character goes through its uppercase form first, so spellings that
/// differ only by contextual lowercase forms (Greek final sigma) share a key.
pub fn fold_case(term: &str) -> String {
    term.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Count occurrences of each distinct term in `text`.
///
/// With `fold` set, terms go through [`fold_case`] before counting so that
/// "Cat" and "cat" collapse into one entry.
pub fn term_counts(text: &str, fold: bool) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in RE.find_iter(text) {
        let term = if fold {
            fold_case(token.as_str())
        } else {
            token.as_str().to_string()
        };
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("this is a a sample");
        assert_eq!(t, vec!["this", "is", "a", "a", "sample"]);
    }

    #[test]
    fn punctuation_is_never_part_of_a_term() {
        let t = tokenize("  Hello,   world!!  snake_case-42 ");
        assert_eq!(t, vec!["Hello", "world", "snake_case", "42"]);
    }

    #[test]
    fn combining_marks_stay_inside_terms() {
        assert_eq!(tokenize("nai\u{308}ve idea"), vec!["nai\u{308}ve", "idea"]);
        assert_eq!(tokenize("हिन्दी भाषा"), vec!["हिन्दी", "भाषा"]);
    }

    #[test]
    fn fold_case_ignores_final_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), fold_case("οδος"));
        assert_eq!(fold_case("οδοσ"), fold_case("οδος"));
        assert_eq!(fold_case("Cat"), "cat");
    }

    #[test]
    fn counts_fold_only_when_asked() {
        let kept = term_counts("Cat cat CAT", false);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept.get("Cat"), Some(&1));

        let folded = term_counts("Cat cat CAT", true);
        assert_eq!(folded.len(), 1);
        assert_eq!(folded.get("cat"), Some(&3));
    }
}
