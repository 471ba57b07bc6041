// ============================================================
// Layer 2: VocabUseCase
// ============================================================
// Runs the whole pipeline for one corpus:
//
//   Step 1: Load sentences        (Layer 4 - data::loader)
//   Step 2: Count token frequency (Layer 4 - data::frequency)
//   Step 3: Filter, sort, index   (Layer 4 - data::vocab_builder)
//   Step 4: Summarise             (this file)
//   Step 5: Optional export       (Layer 5 - infra::vocab_store)

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::{CorpusLoader, DecodePolicy},
    vocab_builder::{VocabBuilder, DEFAULT_MIN_COUNT},
};
use crate::domain::sentence::Sentence;
use crate::domain::traits::SentenceSource;
use crate::domain::vocabulary::Vocabulary;
use crate::infra::vocab_store::VocabStore;

/// Number of words shown from each end of the vocabulary
pub const DEFAULT_PREVIEW: usize = 10;

// ─── VocabConfig ──────────────────────────────────────────────────────────────
/// Everything needed to build a vocabulary from a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabConfig {
    pub corpus:    PathBuf,
    pub min_count: usize,
    pub preview:   usize,
    pub decode:    DecodePolicy,
    /// 1 = sequential counting
    pub shards:    usize,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            corpus:    PathBuf::from("data/AllCombinedText.txt"),
            min_count: DEFAULT_MIN_COUNT,
            preview:   DEFAULT_PREVIEW,
            decode:    DecodePolicy::Ignore,
            shards:    1,
        }
    }
}

// ─── VocabReport ──────────────────────────────────────────────────────────────
/// Summary statistics of one run, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabReport {
    pub sentences:       usize,
    pub total_tokens:    usize,
    pub distinct_tokens: usize,
    pub min_count:       usize,
    pub vocab_size:      usize,
    pub first_words:     Vec<String>,
    pub last_words:      Vec<String>,
}

/// Output of a run: the vocabulary plus its summary
#[derive(Debug)]
pub struct VocabRun {
    pub vocabulary: Vocabulary,
    pub report:     VocabReport,
}

// ─── VocabUseCase ─────────────────────────────────────────────────────────────
pub struct VocabUseCase {
    config: VocabConfig,
}

impl VocabUseCase {
    pub fn new(config: VocabConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VocabConfig {
        &self.config
    }

    /// Load the configured corpus file and build its vocabulary
    pub fn execute(&self) -> Result<VocabRun> {
        let cfg = &self.config;

        let loader = CorpusLoader::new(&cfg.corpus, cfg.decode);
        tracing::info!("Loading corpus from '{}'", loader.path().display());
        self.execute_with(&loader)
    }

    /// Build from any sentence source
    pub fn execute_with(&self, source: &impl SentenceSource) -> Result<VocabRun> {
        let sentences = source
            .load_all()
            .with_context(|| format!("Failed to load corpus '{}'", self.config.corpus.display()))?;

        Ok(self.build(&sentences))
    }

    fn build(&self, sentences: &[Sentence]) -> VocabRun {
        let cfg = &self.config;

        tracing::info!("Building vocabulary (min_count={})", cfg.min_count);
        let builder = VocabBuilder::new(cfg.min_count).with_shards(cfg.shards);
        let (vocabulary, table) = builder.build(sentences);

        let report = VocabReport {
            sentences:       sentences.len(),
            total_tokens:    table.total(),
            distinct_tokens: table.distinct(),
            min_count:       cfg.min_count,
            vocab_size:      vocabulary.vocab_size(),
            first_words:     vocabulary.head(cfg.preview).to_vec(),
            last_words:      vocabulary.tail(cfg.preview).to_vec(),
        };
        tracing::info!(
            "Vocab size: {} ({} distinct tokens, {} occurrences)",
            report.vocab_size,
            report.distinct_tokens,
            report.total_tokens
        );

        VocabRun { vocabulary, report }
    }

    /// Write the vocabulary of `run` through `store`
    pub fn export(&self, run: &VocabRun, store: &VocabStore) -> Result<()> {
        store
            .save(&run.vocabulary, self.config.min_count)
            .with_context(|| format!("Failed to export vocabulary to '{}'", store.path().display()))
    }
}
