//! CLI entry point for the random-dot stereogram renderer

use clap::Parser;
use stereodot::io::cli::{Cli, FileProcessor};

fn main() -> stereodot::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
