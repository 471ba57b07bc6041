// ============================================================
// Layer 4: Vocabulary Builder
// ============================================================
// Sentences → FrequencyTable → filtered, sorted Vocabulary.
//
//   1. Count every token (optionally in parallel shards)
//   2. Keep tokens with count >= min_count
//   3. Sort the survivors ascending (byte order)
//   4. Index i goes to the token at sorted position i
//
// min_count = 0 keeps every distinct token. A min_count above
// the highest count yields an empty vocabulary, which is a
// normal result rather than an error. This stage cannot fail.

use crate::data::frequency::FrequencyTable;
use crate::domain::sentence::Sentence;
use crate::domain::vocabulary::Vocabulary;

/// Default inclusive lower bound on token occurrences
pub const DEFAULT_MIN_COUNT: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct VocabBuilder {
    min_count: usize,
    shards:    usize,
}

impl VocabBuilder {
    pub fn new(min_count: usize) -> Self {
        Self { min_count, shards: 1 }
    }

    /// Count in `shards` parallel shards instead of one pass
    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards;
        self
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Count the sentences and build the vocabulary
    pub fn build(&self, sentences: &[Sentence]) -> (Vocabulary, FrequencyTable) {
        let table = FrequencyTable::count_sharded(sentences, self.shards);
        let vocab = self.build_from_table(&table);
        (vocab, table)
    }

    /// Filter and index an already-counted table
    pub fn build_from_table(&self, table: &FrequencyTable) -> Vocabulary {
        let mut words: Vec<String> = table
            .iter()
            .filter(|&(_, count)| count >= self.min_count)
            .map(|(word, _)| word.to_string())
            .collect();

        // Keys of a map are distinct, so an unstable sort is exact
        words.sort_unstable();

        tracing::debug!(
            "{} of {} distinct tokens reach min_count={}",
            words.len(),
            table.distinct(),
            self.min_count
        );

        Vocabulary::from_sorted_words(words)
    }
}

impl Default for VocabBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COUNT)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokenizer::SimpleTokenizer;
    use crate::domain::traits::Tokenize;

    fn corpus(lines: &[&str]) -> Vec<Sentence> {
        let tok = SimpleTokenizer::new();
        lines
            .iter()
            .filter_map(|l| Sentence::new(tok.tokenize(l)))
            .collect()
    }

    fn cat_corpus() -> Vec<Sentence> {
        corpus(&["The cat sat.", "The Cat Ran.", "cat cat cat"])
    }

    #[test]
    fn test_threshold_two() {
        let (v, table) = VocabBuilder::new(2).build(&cat_corpus());
        assert_eq!(v.index_to_word(), &["cat", "the"]);
        assert_eq!(v.index_of("cat"), Some(0));
        assert_eq!(v.index_of("the"), Some(1));
        assert_eq!(v.vocab_size(), 2);
        assert_eq!(table.count("cat"), 5);
    }

    #[test]
    fn test_threshold_zero_keeps_everything() {
        let (v, _) = VocabBuilder::new(0).build(&cat_corpus());
        assert_eq!(v.index_to_word(), &["cat", "ran", "sat", "the"]);
        assert_eq!(v.vocab_size(), 4);
    }

    #[test]
    fn test_threshold_above_max_count_is_empty() {
        let (v, _) = VocabBuilder::new(6).build(&cat_corpus());
        assert!(v.is_empty());
        assert!(v.word_to_index().is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let (v, _) = VocabBuilder::new(5).build(&cat_corpus());
        assert_eq!(v.index_to_word(), &["cat"]);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(VocabBuilder::default().min_count(), DEFAULT_MIN_COUNT);
        let (v, _) = VocabBuilder::default().build(&cat_corpus());
        assert_eq!(v.index_to_word(), &["cat"]);
    }

    #[test]
    fn test_no_sentences() {
        let (v, table) = VocabBuilder::new(0).build(&[]);
        assert_eq!(v.vocab_size(), 0);
        assert_eq!(table.distinct(), 0);
    }

    #[test]
    fn test_membership_matches_counts_for_every_threshold() {
        let sentences = corpus(&[
            "a a a b b c",
            "d e e f f f f",
            "a b c d e f g h",
            "zebra apple zebra",
        ]);
        for min_count in 0..8 {
            let (v, table) = VocabBuilder::new(min_count).build(&sentences);
            for (word, count) in table.iter() {
                assert_eq!(v.contains(word), count >= min_count, "{word} @ {min_count}");
            }
            assert!(v.index_to_word().windows(2).all(|w| w[0] < w[1]));
            for (word, &i) in v.word_to_index() {
                assert_eq!(&v.index_to_word()[i], word);
            }
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let sentences = cat_corpus();
        let builder   = VocabBuilder::new(1);
        assert_eq!(builder.build(&sentences).0, builder.build(&sentences).0);
    }

    #[test]
    fn test_sharded_build_matches_sequential() {
        let sentences: Vec<Sentence> = (0..20).flat_map(|_| cat_corpus()).collect();
        let (seq, _) = VocabBuilder::new(3).build(&sentences);
        let (par, _) = VocabBuilder::new(3).with_shards(4).build(&sentences);
        assert_eq!(seq, par);
    }
}
