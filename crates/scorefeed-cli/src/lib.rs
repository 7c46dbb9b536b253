//! `scorefeed` command line: load a scores feed export, parse every message,
//! write the resulting table.

mod args;
mod commands;
pub mod config;
pub mod io;
pub mod logging;

pub use args::Cli;
pub use commands::{OUTPUT_PATH, run};
