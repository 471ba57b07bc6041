// ============================================================
// Layer 3: Vocabulary Domain Type
// ============================================================
// The final product of the pipeline: every token that met the
// minimum-count threshold, sorted and indexed.
//
//   index_to_word  ["cat", "the"]        ← sorted ascending
//   word_to_index  {"cat": 0, "the": 1}  ← position in the list
//   vocab_size     2
//
// Invariants:
//   - index_to_word is strictly ascending (byte order), so index 0
//     is always the lexicographically smallest token
//   - index_to_word[word_to_index[w]] == w for every word
//   - vocab_size == index_to_word.len()
//
// A Vocabulary is immutable once constructed.

use std::collections::HashMap;

use crate::domain::errors::InvalidVocabulary;
use crate::domain::sentence::Token;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    word_to_index: HashMap<Token, usize>,
    index_to_word: Vec<Token>,
}

impl Vocabulary {
    /// Build from a word list the caller has already sorted and de-duplicated.
    pub(crate) fn from_sorted_words(index_to_word: Vec<Token>) -> Self {
        debug_assert!(index_to_word.windows(2).all(|w| w[0] < w[1]));

        let word_to_index = index_to_word
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        Self { word_to_index, index_to_word }
    }

    /// Build from an external word list, checking every invariant.
    ///
    /// Used when reading a saved vocabulary back from disk, where
    /// the list may have been edited by hand.
    pub fn try_from_words(words: Vec<Token>) -> Result<Self, InvalidVocabulary> {
        for (index, word) in words.iter().enumerate() {
            if !is_token(word) {
                return Err(InvalidVocabulary::InvalidToken { index, word: word.clone() });
            }
            if index > 0 && words[index - 1] >= *word {
                return Err(InvalidVocabulary::NotAscending { index, word: word.clone() });
            }
        }
        Ok(Self::from_sorted_words(words))
    }

    /// Number of words in the vocabulary
    pub fn vocab_size(&self) -> usize {
        self.index_to_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_word.is_empty()
    }

    /// All words in index order
    pub fn index_to_word(&self) -> &[Token] {
        &self.index_to_word
    }

    pub fn word_to_index(&self) -> &HashMap<Token, usize> {
        &self.word_to_index
    }

    /// Index of `word`, or None if it did not make the threshold
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.word_to_index.get(word).copied()
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.index_to_word.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_to_index.contains_key(word)
    }

    /// The first `n` words (fewer if the vocabulary is smaller)
    pub fn head(&self, n: usize) -> &[Token] {
        &self.index_to_word[..n.min(self.index_to_word.len())]
    }

    /// The last `n` words (the whole list if it is shorter than `n`)
    pub fn tail(&self, n: usize) -> &[Token] {
        let len = self.index_to_word.len();
        &self.index_to_word[len.saturating_sub(n)..]
    }
}

/// True for a non-empty string of lowercase ASCII letters
fn is_token(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Token> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_indices_follow_list_positions() {
        let v = Vocabulary::from_sorted_words(words(&["cat", "ran", "sat", "the"]));
        assert_eq!(v.vocab_size(), 4);
        for (i, w) in v.index_to_word().iter().enumerate() {
            assert_eq!(v.index_of(w), Some(i));
            assert_eq!(v.word_at(i), Some(w.as_str()));
        }
        assert_eq!(v.word_to_index().len(), 4);
    }

    #[test]
    fn test_missing_word() {
        let v = Vocabulary::from_sorted_words(words(&["cat"]));
        assert!(v.contains("cat"));
        assert!(!v.contains("dog"));
        assert_eq!(v.index_of("dog"), None);
        assert_eq!(v.word_at(1), None);
    }

    #[test]
    fn test_head_and_tail_on_short_list() {
        let v = Vocabulary::from_sorted_words(words(&["a", "b", "c"]));
        assert_eq!(v.head(10), &["a", "b", "c"]);
        assert_eq!(v.tail(10), &["a", "b", "c"]);
        assert_eq!(v.head(2), &["a", "b"]);
        assert_eq!(v.tail(2), &["b", "c"]);
        assert!(v.tail(0).is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let v = Vocabulary::default();
        assert!(v.is_empty());
        assert_eq!(v.vocab_size(), 0);
        assert!(v.head(10).is_empty());
        assert!(v.tail(10).is_empty());
    }

    #[test]
    fn test_try_from_words_accepts_sorted_tokens() {
        let v = Vocabulary::try_from_words(words(&["cat", "the"])).unwrap();
        assert_eq!(v.index_of("the"), Some(1));
    }

    #[test]
    fn test_try_from_words_rejects_unsorted() {
        let err = Vocabulary::try_from_words(words(&["the", "cat"])).unwrap_err();
        assert_eq!(err, InvalidVocabulary::NotAscending { index: 1, word: "cat".into() });
    }

    #[test]
    fn test_try_from_words_rejects_duplicates() {
        let err = Vocabulary::try_from_words(words(&["cat", "cat"])).unwrap_err();
        assert!(matches!(err, InvalidVocabulary::NotAscending { index: 1, .. }));
    }

    #[test]
    fn test_try_from_words_rejects_non_tokens() {
        for bad in ["", "Cat", "c4t", "caf\u{e9}"] {
            let err = Vocabulary::try_from_words(words(&[bad])).unwrap_err();
            assert!(matches!(err, InvalidVocabulary::InvalidToken { index: 0, .. }), "{bad:?}");
        }
    }
}
