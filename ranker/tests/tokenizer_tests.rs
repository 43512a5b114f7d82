use ranker::tokenizer::tokenize;

#[test]
fn lowercases_strips_punctuation_and_splits_on_whitespace() {
    assert_eq!(
        tokenize("The quick, brown fox jumps over the lazy dog!"),
        vec!["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"]
    );
}

#[test]
fn empty_and_whitespace_inputs_yield_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n ").is_empty());
}

#[test]
fn repeated_terms_stay_in_order() {
    assert_eq!(tokenize("fox fox dog fox"), vec!["fox", "fox", "dog", "fox"]);
}

#[test]
fn intra_word_punctuation_joins_rather_than_splits() {
    assert_eq!(tokenize("state-of-the-art"), vec!["stateoftheart"]);
    assert_eq!(tokenize("don't"), vec!["dont"]);
}

#[test]
fn no_stemming_or_stopword_removal() {
    assert_eq!(tokenize("the foxes were running"), vec!["the", "foxes", "were", "running"]);
}

#[test]
fn unicode_words_survive_normalization() {
    assert_eq!(tokenize("Zoë’s CAFÉ"), vec!["zoës", "café"]);
}
