// ============================================================
// Layer 4: Frequency Table
// ============================================================
// Counts how often every token occurs across all Sentences.
//
// Counting is commutative and associative, so the corpus can be
// cut into shards, each shard counted on its own thread, and
// the partial tables merged by summing per token. The result is
// identical to a single sequential pass.
//
//   sentences ──┬── shard 0 ──► table 0 ──┐
//               ├── shard 1 ──► table 1 ──┼──► merge ──► table
//               └── shard 2 ──► table 2 ──┘
//
// Reference: rayon crate documentation (ParallelSlice::par_chunks)

use std::collections::HashMap;

use rayon::prelude::*;

use crate::domain::sentence::{Sentence, Token};

/// Token → occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Token, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of every sentence in one sequential pass
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let mut table = Self::new();
        for sentence in sentences {
            table.add_sentence(sentence);
        }
        table
    }

    /// Count with up to `shards` worker shards.
    /// `shards <= 1` falls back to the sequential pass.
    pub fn count_sharded(sentences: &[Sentence], shards: usize) -> Self {
        if shards <= 1 || sentences.len() < 2 {
            return Self::from_sentences(sentences);
        }

        let shard_len = sentences.len().div_ceil(shards);
        tracing::debug!(
            "Counting {} sentences in shards of {}",
            sentences.len(),
            shard_len
        );

        sentences
            .par_chunks(shard_len)
            .map(Self::from_sentences)
            .reduce(Self::new, Self::merge)
    }

    pub fn add_sentence(&mut self, sentence: &Sentence) {
        for token in sentence.tokens() {
            self.add(token);
        }
    }

    pub fn add(&mut self, token: &str) {
        // get_mut first so the common case does not allocate a key
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(token.to_string(), 1);
        }
    }

    /// Sum two tables per token
    pub fn merge(mut self, other: Self) -> Self {
        // Fold the smaller table into the larger one
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (std::mem::take(&mut self.counts), other.counts)
        } else {
            (other.counts, std::mem::take(&mut self.counts))
        };
        for (token, count) in from {
            *into.entry(token).or_insert(0) += count;
        }
        Self { counts: into }
    }

    /// Occurrences of `token` (0 if never seen)
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of token occurrences
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }
}
