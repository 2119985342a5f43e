//! CLI entry point for tumor overlay and volume analysis

use clap::Parser;
use tracing::Level;
use tumorlens::io::cli::{CaseProcessor, Cli};

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> tumorlens::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let processor = CaseProcessor::new(cli)?;
    processor.process()
}
