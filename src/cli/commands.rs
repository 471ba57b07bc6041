// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   stats    build a vocabulary and print its summary
//   export   same, then write the vocabulary to a file
//   inspect  summarise a previously exported vocabulary
//
// clap types stop here. Each args struct converts into an
// application-layer type via From.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::application::vocab_use_case::{VocabConfig, DEFAULT_PREVIEW};
use crate::data::loader::DecodePolicy;
use crate::data::vocab_builder::DEFAULT_MIN_COUNT;
use crate::infra::vocab_store::VocabFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary of a corpus and print its statistics
    Stats(StatsArgs),

    /// Build the vocabulary and write it to a file
    Export(ExportArgs),

    /// Print statistics of a previously exported vocabulary
    Inspect(InspectArgs),
}

/// Options shared by every command that reads a corpus
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Plain-text corpus, one sentence per line
    #[arg(long, short, default_value = "data/AllCombinedText.txt")]
    pub corpus: PathBuf,

    /// Keep only words seen at least this many times (inclusive)
    #[arg(long, short, default_value_t = DEFAULT_MIN_COUNT)]
    pub min_count: usize,

    /// How many words to show from each end of the vocabulary
    #[arg(long, default_value_t = DEFAULT_PREVIEW)]
    pub preview: usize,

    /// What to do with bytes that are not valid UTF-8
    #[arg(long, value_enum, default_value_t = DecodeArg::Ignore)]
    pub decode: DecodeArg,

    /// Count frequencies in this many parallel shards (1 = sequential)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub shards: u16,
}

impl From<CorpusArgs> for VocabConfig {
    fn from(a: CorpusArgs) -> Self {
        VocabConfig {
            corpus:    a.corpus,
            min_count: a.min_count,
            preview:   a.preview,
            decode:    a.decode.into(),
            shards:    usize::from(a.shards),
        }
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Destination file
    #[arg(long, short)]
    pub output: PathBuf,

    /// File format; inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Vocabulary file written by `export`
    #[arg(long, short)]
    pub input: PathBuf,

    /// File format; inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// How many words to show from each end of the vocabulary
    #[arg(long, default_value_t = DEFAULT_PREVIEW)]
    pub preview: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeArg {
    /// Drop invalid byte sequences
    Ignore,
    /// Replace invalid byte sequences with U+FFFD
    Replace,
}

impl From<DecodeArg> for DecodePolicy {
    fn from(a: DecodeArg) -> Self {
        match a {
            DecodeArg::Ignore  => DecodePolicy::Ignore,
            DecodeArg::Replace => DecodePolicy::Replace,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// One word per line
    Text,
    /// JSON document with the word list and threshold
    Json,
}

impl From<FormatArg> for VocabFormat {
    fn from(a: FormatArg) -> Self {
        match a {
            FormatArg::Text => VocabFormat::Text,
            FormatArg::Json => VocabFormat::Json,
        }
    }
}
