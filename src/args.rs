use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::game::DEFAULT_RESTART_DELAY_MS;

#[derive(Parser, Debug)]
#[command(name = "tic-tac-tally", about = "Two-player tic-tac-toe with a running score")]
pub struct Args {
    /// Delay before a finished round is cleared, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_RESTART_DELAY_MS)]
    pub restart_delay_ms: u64,

    /// Directory for the log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub restart_delay: Duration,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            restart_delay: Duration::from_millis(args.restart_delay_ms),
            log_dir: args.log_dir.unwrap_or_else(default_log_dir),
            log_level: args.log_level,
        }
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("tic-tac-tally")
}
