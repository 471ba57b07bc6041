// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything between the corpus file and the Vocabulary.
//
//   corpus.txt
//       │
//       ▼
//   CorpusLoader      → decodes bytes, one Sentence per line
//       │                (uses SimpleTokenizer)
//       ▼
//   FrequencyTable    → token → count, optionally sharded
//       │
//       ▼
//   VocabBuilder      → threshold, sort, index
//
// Each step is its own module so it can be tested on its own.

/// Lowercase / strip / split tokenizer
pub mod tokenizer;

/// Reads the corpus file into Sentences
pub mod loader;

/// Token counting
pub mod frequency;

/// Threshold filtering and index assignment
pub mod vocab_builder;
