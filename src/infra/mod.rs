// ============================================================
// Layer 5: Infrastructure Layer
// ============================================================
// Persistence that sits outside the core pipeline.
//
//   vocab_store.rs: write a Vocabulary as a plain word list or
//                    JSON, and read it back with its invariants
//                    re-checked
//
// Nothing in the data pipeline depends on this layer; building
// a vocabulary never touches the disk beyond reading the corpus.

/// Vocabulary export and re-import
pub mod vocab_store;
