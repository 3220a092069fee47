use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_COMPRESSION_LEVEL, DEFAULT_OUTPUT_PATH};

#[derive(Parser, Debug)]
#[command(name = "pdf-optimizer")]
#[command(
    author,
    version,
    about = "Optimize a PDF file by compressing its content streams."
)]
pub struct Args {
    /// Path to the input PDF file
    #[arg(required = true)]
    pub input_pdf: PathBuf,

    /// Path for the optimized PDF
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Flate compression level for re-encoded content streams (0-9)
    #[arg(long, default_value_t = DEFAULT_COMPRESSION_LEVEL, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: u32,

    /// Keep objects that are no longer referenced after compression
    #[arg(long)]
    pub keep_unused: bool,

    /// Compress each content stream separately instead of merging them per page
    #[arg(long)]
    pub no_merge: bool,

    /// Reload the output and check that its page count matches the input
    #[arg(long)]
    pub verify: bool,

    /// Exit with a non-zero status when optimization fails
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Map the verbosity counter to a log level
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
