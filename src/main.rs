//! CLI entry point for the branching pattern generation tool

use clap::Parser;
use filigree::io::cli::{Cli, SceneProcessor};

fn main() -> filigree::Result<()> {
    let cli = Cli::parse();
    let mut processor = SceneProcessor::new(cli);
    processor.process()
}
