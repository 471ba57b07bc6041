// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results. All work is
// delegated to Layer 2 (application).
//
// Printed summary (stdout):
//   Loaded 3 sentences.
//   Vocab size: 2
//   First 10 words: ["cat", "the"]
//   Last 10 words: ["cat", "the"]
//
// Progress logging goes through tracing to stderr.

pub mod commands;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, FormatArg, InspectArgs, StatsArgs};

use crate::application::inspect_use_case::InspectUseCase;
use crate::application::vocab_use_case::{VocabReport, VocabUseCase};
use crate::domain::vocabulary::Vocabulary;
use crate::infra::vocab_store::VocabStore;

#[derive(Parser, Debug)]
#[command(
    name = "vocab-info",
    version,
    about = "Inspect the frequency-filtered vocabulary of a text corpus."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Stats(args)   => run_stats(args, &mut out),
            Commands::Export(args)  => run_export(args, &mut out),
            Commands::Inspect(args) => run_inspect(args, &mut out),
        }
    }
}

fn run_stats(args: StatsArgs, out: &mut impl Write) -> Result<()> {
    let use_case = VocabUseCase::new(args.corpus.into());
    let run      = use_case.execute()?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&run.report)?)?;
    } else {
        write_report(out, &run.report, use_case.config().preview)?;
    }
    Ok(())
}

fn run_export(args: ExportArgs, out: &mut impl Write) -> Result<()> {
    let store    = open_store(args.output, args.format);
    let use_case = VocabUseCase::new(args.corpus.into());
    let run      = use_case.execute()?;

    write_report(out, &run.report, use_case.config().preview)?;
    use_case.export(&run, &store)?;
    writeln!(
        out,
        "Wrote {} words to {}",
        run.report.vocab_size,
        store.path().display()
    )?;
    Ok(())
}

fn run_inspect(args: InspectArgs, out: &mut impl Write) -> Result<()> {
    let store  = open_store(args.input, args.format);
    let stored = InspectUseCase::new(store).execute()?;

    if let Some(min_count) = stored.min_count {
        writeln!(out, "Min count: {}", min_count)?;
    }
    write_vocabulary(out, &stored.vocabulary, args.preview)
}

fn open_store(path: PathBuf, format: Option<FormatArg>) -> VocabStore {
    match format {
        Some(f) => VocabStore::with_format(path, f.into()),
        None    => VocabStore::new(path),
    }
}

fn write_report(out: &mut impl Write, report: &VocabReport, preview: usize) -> Result<()> {
    writeln!(out, "Loaded {} sentences.", report.sentences)?;
    writeln!(out, "Vocab size: {}", report.vocab_size)?;
    writeln!(out, "First {} words: {:?}", preview, report.first_words)?;
    writeln!(out, "Last {} words: {:?}", preview, report.last_words)?;
    Ok(())
}

fn write_vocabulary(out: &mut impl Write, vocab: &Vocabulary, preview: usize) -> Result<()> {
    writeln!(out, "Vocab size: {}", vocab.vocab_size())?;
    writeln!(out, "First {} words: {:?}", preview, vocab.head(preview))?;
    writeln!(out, "Last {} words: {:?}", preview, vocab.tail(preview))?;
    Ok(())
}
