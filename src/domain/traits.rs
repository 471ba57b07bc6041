// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The application layer talks to the data layer through these
// traits, so a different tokenizer or corpus source can be
// swapped in without touching the use cases.
//
//   - SimpleTokenizer implements Tokenize
//   - CorpusLoader    implements SentenceSource
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::errors::CorpusError;
use crate::domain::sentence::{Sentence, Token};

// ─── Tokenize ─────────────────────────────────────────────────────────────────
/// Turns one line of text into tokens.
///
/// Tokenization is total: any input string yields a (possibly
/// empty) token list and never fails.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

// ─── SentenceSource ───────────────────────────────────────────────────────────
/// Any component that can produce the ordered Sentences of a corpus.
pub trait SentenceSource {
    /// Load every Sentence in source order.
    fn load_all(&self) -> Result<Vec<Sentence>, CorpusError>;
}
