//! Word tokenization for sentiment scoring
//!
//! Deterministic, locale-independent splitting of raw article text into
//! lowercase word tokens. English-only by design; the boundaries are plain
//! ASCII-alphanumeric runs, so punctuation and whitespace never leak into
//! tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[A-Za-z0-9]+").expect("static token pattern");
}

/// Split raw text into lowercase word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            tokenize("Economy booms amid recovery"),
            vec!["economy", "booms", "amid", "recovery"]
        );
    }

    #[test]
    fn test_lowercases_tokens() {
        assert_eq!(tokenize("Markets CRASH"), vec!["markets", "crash"]);
    }

    #[test]
    fn test_punctuation_boundaries() {
        assert_eq!(
            tokenize("Stocks surge, bonds fall; oil -- flat."),
            vec!["stocks", "surge", "bonds", "fall", "oil", "flat"]
        );
    }

    #[test]
    fn test_apostrophes_split_words() {
        // "don't" splits at the apostrophe, same as plain \w+ tokenizers
        assert_eq!(tokenize("don't panic"), vec!["don", "t", "panic"]);
    }

    #[test]
    fn test_digits_are_tokens() {
        assert_eq!(tokenize("S&P 500 up 2%"), vec!["s", "p", "500", "up", "2"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
        assert!(tokenize("!!! ... ---").is_empty());
    }
}
