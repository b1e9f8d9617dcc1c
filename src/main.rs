//! CLI entry point for the glyph-art renderer

use asciify::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> asciify::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    FileProcessor::new(cli).process()
}
