// ============================================================
// Layer 3: Sentence Domain Type
// ============================================================
// A Sentence is the ordered token sequence produced from one
// non-blank line of the corpus. Order is kept even though the
// vocabulary builder only counts tokens, so any consumer that
// cares about position still gets it.
//
// Invariant: a Sentence always holds at least one token.
// The constructor returns None for an empty sequence, so a
// zero-token Sentence can never reach the builder.

/// A normalised word: lowercase ASCII letters only, never empty.
pub type Token = String;

/// One tokenized line of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Wrap a token sequence, or return None when it is empty.
    pub fn new(tokens: Vec<Token>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// Tokens in line order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a constructed Sentence; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
