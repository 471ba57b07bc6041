// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust types that describe what the pipeline works with.
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap or serde_json types
//   - Only structs, enums, traits and their invariants
//
// A Sentence is what the loader emits, a Vocabulary is what the
// builder produces. Everything in between (frequency counting,
// tokenization) lives in the data layer.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One tokenized line of the corpus
pub mod sentence;

// The filtered, indexed word list
pub mod vocabulary;

// Typed errors shared across layers
pub mod errors;

// Seams between the layers
pub mod traits;
