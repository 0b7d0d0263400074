use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned human-readable lines (default)
    #[default]
    Terminal,
    /// Serialized descriptors
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "callable-inspect")]
#[command(about = "Print the resolved traits of a catalogue of callables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only show these catalogue entries (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Configuration file (defaults to callable-inspect.toml in the current
    /// directory or an ancestor)
    #[arg(short, long, env = "CALLABLE_INSPECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// List catalogue entry names and exit
    #[arg(long)]
    pub list: bool,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Log level for `env_logger` when `RUST_LOG` is unset.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
