// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Orchestrates the other layers for one user goal.
//
// Rules for this layer:
//   - No tokenization or counting logic (that's Layer 4)
//   - No printing (that's Layer 1)
//   - No clap types; the CLI converts its args into VocabConfig
//
// Reference: Rust Book §7 (Module System)

// Corpus → Vocabulary, with an optional export
pub mod vocab_use_case;

// Saved vocabulary file → Vocabulary
pub mod inspect_use_case;
