use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pdfobj::DEFAULT_MAX_DEPTH;

/// Parses the PDF objects of a file and writes them back out.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    pub filename: PathBuf,

    /// Byte offset of the first object
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// Maximum nesting of arrays, dictionaries and indirect objects
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::ERROR,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
