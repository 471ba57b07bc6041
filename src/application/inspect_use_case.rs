// ============================================================
// Layer 2: InspectUseCase
// ============================================================
// Reads a vocabulary previously written by `export` and
// summarises it without touching the original corpus.

use anyhow::{Context, Result};

use crate::infra::vocab_store::{StoredVocab, VocabStore};

pub struct InspectUseCase {
    store: VocabStore,
}

impl InspectUseCase {
    pub fn new(store: VocabStore) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<StoredVocab> {
        tracing::info!("Reading vocabulary from '{}'", self.store.path().display());

        let stored = self
            .store
            .load()
            .with_context(|| format!("Cannot inspect '{}'", self.store.path().display()))?;

        if let Some(min_count) = stored.min_count {
            tracing::info!("Vocabulary was built with min_count={}", min_count);
        }
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocabulary::Vocabulary;
    use crate::infra::vocab_store::StoreError;

    #[test]
    fn test_reads_exported_text_file() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = dir.path().join("vocab.txt");
        let vocab = Vocabulary::try_from_words(vec!["ant".into(), "bee".into()]).unwrap();
        VocabStore::new(&path).save(&vocab, 3).unwrap();

        let stored = InspectUseCase::new(VocabStore::new(&path)).execute().unwrap();
        assert_eq!(stored.vocabulary, vocab);
    }

    #[test]
    fn test_missing_file_keeps_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InspectUseCase::new(VocabStore::new(dir.path().join("nope.txt")))
            .execute()
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::Io { .. })));
    }
}
