use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scorefeed")]
#[command(about = "Parse a scores feed channel export into a table of score events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Channel export (CSV) to parse
    pub input: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// TOML file overriding the platform alias table
    #[arg(long)]
    pub config: Option<PathBuf>,
}
