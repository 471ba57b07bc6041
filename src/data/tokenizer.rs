// ============================================================
// Layer 4: Simple Alphabetic Tokenizer
// ============================================================
// Turns one line of text into lowercase ASCII-letter tokens.
//
// Steps (applied in order):
//   1. Lowercase the whole line
//   2. Replace every character that is not an ASCII letter or
//      whitespace with a single space
//   3. Split on runs of whitespace
//
// Examples:
//   "The cat sat."   → ["the", "cat", "sat"]
//   "don't stop"     → ["don", "t", "stop"]
//   "café au lait"   → ["caf", "au", "lait"]
//   "123 !!! 456"    → []
//
// Non-ASCII letters are treated like punctuation: they split a
// word rather than join it. There is no Unicode normalisation.
//
// Reference: regex crate documentation

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::sentence::Token;
use crate::domain::traits::Tokenize;

lazy_static! {
    // Anything that is not an ASCII letter or whitespace
    static ref NON_LETTER: Regex = Regex::new(r"[^a-zA-Z\s]").unwrap();
}

/// Lowercase / strip / split tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenize for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let lowered  = text.to_lowercase();
        let stripped = NON_LETTER.replace_all(&lowered, " ");

        stripped
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        SimpleTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(tok("The Cat Ran."), vec!["the", "cat", "ran"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(tok("don't"), vec!["don", "t"]);
        assert_eq!(tok("well-known,fact"), vec!["well", "known", "fact"]);
    }

    #[test]
    fn test_digits_and_symbols_only() {
        assert!(tok("123 !!! 456").is_empty());
        assert!(tok("").is_empty());
        assert!(tok("   \t ").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(tok("café au lait"), vec!["caf", "au", "lait"]);
        assert_eq!(tok("naïve"), vec!["na", "ve"]);
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(tok("  cat\t\tsat   on mat "), vec!["cat", "sat", "on", "mat"]);
    }

    #[test]
    fn test_backslash_is_not_a_letter() {
        assert_eq!(tok(r"cat\dog"), vec!["cat", "dog"]);
    }

    #[test]
    fn test_tokens_are_lowercase_ascii() {
        let tokens = tok("ÀBC déf GHI 42 jkl_mno");
        assert!(!tokens.is_empty());
        for t in tokens {
            assert!(t.bytes().all(|b| b.is_ascii_lowercase()), "{t:?}");
        }
    }
}
