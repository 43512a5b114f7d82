use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref PUNCT: Regex = Regex::new(r"[^\p{L}\p{N}\s]+").expect("valid regex");
}

/// Tokenize text into lowercase word tokens using NFKC normalization,
/// punctuation stripping, and whitespace splitting. Punctuation is removed
/// rather than treated as a separator, so "state-of-the-art" becomes one
/// token. No stemming, no stopword removal.
///
/// Documents and queries must pass through this same function; diverging
/// tokenization breaks score comparability.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    let stripped = PUNCT.replace_all(&normalized, "");
    stripped.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        assert_eq!(tokenize("The quick brown fox!"), vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn keeps_digits() {
        assert!(tokenize("Call 911 now.").contains(&"911".to_string()));
    }
}
