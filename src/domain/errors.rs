// ============================================================
// Layer 3: Domain Errors
// ============================================================
// The pipeline has exactly one fatal condition: the corpus file
// cannot be opened. Invalid bytes inside the file are NOT an
// error; the loader decodes lossily (see data::loader).
//
// InvalidVocabulary is raised only when rebuilding a Vocabulary
// from an external word list (e.g. a saved vocabulary file).
// Building from a corpus never fails.
//
// Reference: thiserror crate documentation

use std::{io, path::PathBuf};
use thiserror::Error;

/// Failure to read the input corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The path does not exist, is not a readable file, or permission is denied.
    #[error("cannot access corpus file '{}'", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A word list that cannot form a Vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidVocabulary {
    /// A word is empty or contains something other than lowercase ASCII letters
    #[error("word {index} ('{word}') is not a lowercase ASCII token")]
    InvalidToken { index: usize, word: String },

    /// Words must be strictly ascending, which also rules out duplicates
    #[error("word {index} ('{word}') is not greater than the word before it")]
    NotAscending { index: usize, word: String },
}
