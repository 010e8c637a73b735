use termdex_core::tokenizer::{term_counts, tokenize};

#[test]
fn it_splits_on_non_word_runs() {
    let words = tokenize("Running, runner's run! The café's menu.");
    assert_eq!(words, vec!["Running", "runner", "s", "run", "The", "café", "s", "menu"]);
}

#[test]
fn it_keeps_digits_and_underscores() {
    let words = tokenize("v2_final -- 2024/10/16");
    assert_eq!(words, vec!["v2_final", "2024", "10", "16"]);
}

#[test]
fn it_yields_nothing_for_delimiters_only() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n,.;!?-").is_empty());
    assert!(term_counts("...", false).is_empty());
}

#[test]
fn it_counts_without_folding_by_default() {
    let counts = term_counts("The the THE", false);
    assert_eq!(counts.get("The"), Some(&1));
    assert_eq!(counts.get("the"), Some(&1));
    assert_eq!(counts.get("THE"), Some(&1));
}

#[test]
fn it_keeps_combining_marks_in_terms() {
    assert_eq!(tokenize("nai\u{308}ve"), vec!["nai\u{308}ve"]);
    assert_eq!(tokenize("हिन्दी, বাংলা"), vec!["हिन्दी", "বাংলা"]);
}
