// ============================================================
// Layer 5: Vocabulary Store
// ============================================================
// Writes a Vocabulary to disk and reads it back.
//
// Two formats:
//
//   text  one token per line, in index order
//           cat
//           the
//
//   json  the word list plus the threshold it was built with
//           {
//             "min_count": 2,
//             "vocab_size": 2,
//             "words": ["cat", "the"]
//           }
//
// Line number (text) or array position (json) IS the index, so
// a file round-trips to the same word_to_index mapping.
//
// Loading re-checks every Vocabulary invariant. A file that was
// edited by hand into an unsorted or non-token list is rejected
// rather than silently re-sorted, because re-sorting would
// change the indices of the words.
//
// Reference: Rust Book §12 (I/O and File Handling)
//            serde_json crate documentation

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::errors::InvalidVocabulary;
use crate::domain::vocabulary::Vocabulary;

/// On-disk vocabulary layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabFormat {
    Text,
    Json,
}

impl VocabFormat {
    /// `.json` → Json, anything else → Text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access vocabulary file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary JSON in '{}'", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("vocabulary file '{}' declares {declared} words but lists {actual}", .path.display())]
    SizeMismatch {
        path:     PathBuf,
        declared: usize,
        actual:   usize,
    },

    #[error("malformed vocabulary file '{}'", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: InvalidVocabulary,
    },
}

/// JSON document layout
#[derive(Debug, Serialize, Deserialize)]
struct VocabFile {
    min_count:  Option<usize>,
    vocab_size: usize,
    words:      Vec<String>,
}

/// A vocabulary read back from disk
#[derive(Debug)]
pub struct StoredVocab {
    pub vocabulary: Vocabulary,
    /// Threshold recorded in the file; text files do not carry one
    pub min_count:  Option<usize>,
}

/// Saves and loads vocabularies at a single path.
pub struct VocabStore {
    path:   PathBuf,
    format: VocabFormat,
}

impl VocabStore {
    /// Store at `path`, inferring the format from the extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path   = path.into();
        let format = VocabFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: VocabFormat) -> Self {
        Self { path: path.into(), format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> VocabFormat {
        self.format
    }

    /// Write `vocab` to disk, creating parent directories as needed.
    pub fn save(&self, vocab: &Vocabulary, min_count: usize) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let contents = match self.format {
            VocabFormat::Text => {
                let mut out = String::new();
                for word in vocab.index_to_word() {
                    out.push_str(word);
                    out.push('\n');
                }
                out
            }
            VocabFormat::Json => {
                let file = VocabFile {
                    min_count:  Some(min_count),
                    vocab_size: vocab.vocab_size(),
                    words:      vocab.index_to_word().to_vec(),
                };
                serde_json::to_string_pretty(&file).map_err(|source| StoreError::Json {
                    path: self.path.clone(),
                    source,
                })?
            }
        };

        fs::write(&self.path, contents).map_err(|source| self.io_error(source))?;

        tracing::info!(
            "Saved {} words to '{}' ({:?})",
            vocab.vocab_size(),
            self.path.display(),
            self.format
        );
        Ok(())
    }

    /// Read a vocabulary back, validating its invariants.
    pub fn load(&self) -> Result<StoredVocab, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;

        let (words, min_count) = match self.format {
            VocabFormat::Text => {
                // Blank lines are tolerated so a trailing newline or an
                // empty file both load cleanly
                let words: Vec<String> = contents
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect();
                (words, None)
            }
            VocabFormat::Json => {
                let file: VocabFile =
                    serde_json::from_str(&contents).map_err(|source| StoreError::Json {
                        path: self.path.clone(),
                        source,
                    })?;
                if file.vocab_size != file.words.len() {
                    return Err(StoreError::SizeMismatch {
                        path:     self.path.clone(),
                        declared: file.vocab_size,
                        actual:   file.words.len(),
                    });
                }
                (file.words, file.min_count)
            }
        };

        let vocabulary = Vocabulary::try_from_words(words).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "Loaded {} words from '{}'",
            vocabulary.vocab_size(),
            self.path.display()
        );
        Ok(StoredVocab { vocabulary, min_count })
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary {
        Vocabulary::try_from_words(vec!["cat".into(), "ran".into(), "the".into()]).unwrap()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(VocabFormat::from_path(Path::new("v.json")), VocabFormat::Json);
        assert_eq!(VocabFormat::from_path(Path::new("v.JSON")), VocabFormat::Json);
        assert_eq!(VocabFormat::from_path(Path::new("v.txt")), VocabFormat::Text);
        assert_eq!(VocabFormat::from_path(Path::new("vocab")), VocabFormat::Text);
    }

    #[test]
    fn test_text_file_is_one_word_per_line() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path().join("vocab.txt"));
        store.save(&sample(), 2).unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(written, "cat\nran\nthe\n");

        let loaded = store.load().unwrap();
        assert_eq!(loaded.vocabulary, sample());
        assert_eq!(loaded.min_count, None);
    }

    #[test]
    fn test_json_keeps_min_count() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path().join("nested").join("vocab.json"));
        assert_eq!(store.format(), VocabFormat::Json);
        store.save(&sample(), 2).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.vocabulary.index_of("the"), Some(2));
        assert_eq!(loaded.min_count, Some(2));
    }

    #[test]
    fn test_empty_vocabulary_saves_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["empty.txt", "empty.json"] {
            let store = VocabStore::new(dir.path().join(name));
            store.save(&Vocabulary::default(), 5).unwrap();
            assert!(store.load().unwrap().vocabulary.is_empty());
        }
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::with_format(dir.path().join("vocab.dat"), VocabFormat::Json);
        store.save(&sample(), 1).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.trim_start().starts_with('{'));
    }

    #[test]
    fn test_unsorted_text_file_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "the\ncat\n").unwrap();
        let err = VocabStore::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Malformed { source: InvalidVocabulary::NotAscending { index: 1, .. }, .. }
        ));
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"min_count": 1, "vocab_size": 3, "words": ["a", "b"]}"#).unwrap();
        let err = VocabStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::SizeMismatch { declared: 3, actual: 2, .. }));
    }

    #[test]
    fn test_bad_json_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(VocabStore::new(&path).load(), Err(StoreError::Json { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VocabStore::new(dir.path().join("absent.txt")).load().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
