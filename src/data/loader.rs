// ============================================================
// Layer 4: Corpus Loader
// ============================================================
// Reads a plain-text corpus and emits one Sentence per line.
//
// Per line:
//   1. Trim leading/trailing whitespace
//   2. Skip the line if nothing is left
//   3. Tokenize it
//   4. Skip it if tokenization produced no tokens
//      (e.g. "123 !!! 456")
//
// Line boundaries are "\n", "\r\n" and a lone "\r". A "\r\n"
// pair yields an empty piece between the two characters, which
// step 2 drops, so no special casing is needed.
//
// Decoding is lossy on purpose. A corpus scraped from many
// sources often has a few bad bytes, and one of them should not
// stop the whole run:
//   - DecodePolicy::Ignore  drops invalid sequences    ("ab\xFFcd" → "abcd")
//   - DecodePolicy::Replace substitutes U+FFFD         ("ab\xFFcd" → "ab�cd")
// The replacement character is not an ASCII letter, so under
// Replace it ends up as a token separator.
//
// The only fatal error is a file that cannot be read at all.
//
// Reference: Rust Book §9 (Error Handling)
//            std::str::Utf8Chunks documentation

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::data::tokenizer::SimpleTokenizer;
use crate::domain::errors::CorpusError;
use crate::domain::sentence::Sentence;
use crate::domain::traits::{SentenceSource, Tokenize};

/// What to do with byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Drop invalid bytes
    #[default]
    Ignore,
    /// Replace each invalid sequence with U+FFFD
    Replace,
}

/// Decode raw corpus bytes to text under the given policy.
/// Borrows when the input is already valid UTF-8.
pub fn decode(bytes: &[u8], policy: DecodePolicy) -> Cow<'_, str> {
    match policy {
        DecodePolicy::Replace => String::from_utf8_lossy(bytes),
        DecodePolicy::Ignore => {
            if let Ok(text) = std::str::from_utf8(bytes) {
                return Cow::Borrowed(text);
            }
            let mut out     = String::with_capacity(bytes.len());
            let mut dropped = 0usize;
            for chunk in bytes.utf8_chunks() {
                out.push_str(chunk.valid());
                dropped += chunk.invalid().len();
            }
            tracing::warn!("Dropped {} invalid UTF-8 bytes while decoding corpus", dropped);
            Cow::Owned(out)
        }
    }
}

/// Loads a text corpus from a single file.
pub struct CorpusLoader<T = SimpleTokenizer> {
    path:      PathBuf,
    policy:    DecodePolicy,
    tokenizer: T,
}

impl CorpusLoader<SimpleTokenizer> {
    /// Create a loader with the default tokenizer
    pub fn new(path: impl Into<PathBuf>, policy: DecodePolicy) -> Self {
        Self::with_tokenizer(path, policy, SimpleTokenizer::new())
    }
}

impl<T: Tokenize> CorpusLoader<T> {
    pub fn with_tokenizer(path: impl Into<PathBuf>, policy: DecodePolicy, tokenizer: T) -> Self {
        Self { path: path.into(), policy, tokenizer }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Split already-decoded text into Sentences, one per qualifying line.
    pub fn sentences_from_text(&self, text: &str) -> Vec<Sentence> {
        text.split(|c: char| c == '\n' || c == '\r')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| Sentence::new(self.tokenizer.tokenize(line)))
            .collect()
    }
}

impl<T: Tokenize> SentenceSource for CorpusLoader<T> {
    fn load_all(&self) -> Result<Vec<Sentence>, CorpusError> {
        let bytes = fs::read(&self.path).map_err(|source| CorpusError::FileAccess {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("Read {} bytes from '{}'", bytes.len(), self.path.display());

        let text      = decode(&bytes, self.policy);
        let sentences = self.sentences_from_text(&text);

        tracing::info!("Loaded {} sentences.", sentences.len());
        Ok(sentences)
    }
}
