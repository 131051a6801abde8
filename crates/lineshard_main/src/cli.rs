use std::path::PathBuf;

use clap::Parser;
use lineshard_domain::{DEFAULT_LOOKAHEAD, PartitionConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Split a newline-delimited file into line-aligned partitions")]
pub struct Cli {
    /// File to partition
    pub file: PathBuf,

    /// Intended number of partitions (defaults to the number of CPUs)
    #[arg(short, long, env = "LINESHARD_WORKERS")]
    pub workers: Option<usize>,

    /// Initial number of bytes searched for a newline after each nominal
    /// boundary
    #[arg(long, env = "LINESHARD_LOOKAHEAD", default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,

    /// Fail instead of growing the lookahead window beyond this many bytes
    #[arg(long, env = "LINESHARD_MAX_LOOKAHEAD")]
    pub max_lookahead: Option<usize>,

    /// Show the first line of every partition
    #[arg(long, short)]
    pub inspect: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> PartitionConfig {
        let mut config = PartitionConfig::default().lookahead(self.lookahead);
        if let Some(workers) = self.workers {
            config = config.workers(workers);
        }
        if let Some(max_lookahead) = self.max_lookahead {
            config = config.max_lookahead(max_lookahead);
        }
        config
    }
}
