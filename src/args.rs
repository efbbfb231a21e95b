use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::parsers::{parse_chunk_size, parse_positive_usize};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_words",
    version = crate::VERSION,
    about = "Count lines, words and characters using a pool of worker threads",
    after_help = "If none of -l, -w, -c is given, all three are counted. \
                  With no FILES, or when FILE is -, standard input is read."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Count lines
    #[arg(short, long, help_heading = "Metrics")]
    pub lines: bool,

    /// Count words
    #[arg(short, long, help_heading = "Metrics")]
    pub words: bool,

    /// Count characters
    #[arg(short, long, help_heading = "Metrics")]
    pub chars: bool,

    /// Script-friendly output: file;lines;words;chars
    #[arg(short, long, conflicts_with = "json", help_heading = "Output")]
    pub parseable: bool,

    /// Print results as a JSON document
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// Number of worker threads [default: available parallelism]
    #[arg(short = 'm', long, value_parser = parse_positive_usize, help_heading = "Performance")]
    pub max_threads: Option<usize>,

    /// Characters per work unit (accepts k/m suffixes)
    #[arg(short = 't', long, value_parser = parse_chunk_size, help_heading = "Performance")]
    pub chunk_size: Option<usize>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Files to count
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
