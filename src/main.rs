use anyhow::Result;
use clap::Parser;
use vocab_info::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so the printed summary on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vocab_info=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
