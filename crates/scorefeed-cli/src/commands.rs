use super::args::Cli;
use crate::config::Config;
use crate::{io, logging};
use anyhow::Result;
use scorefeed_parser::FeedParser;
use std::path::Path;
use tracing::info;

/// Where the parsed table is written, relative to the working directory
pub const OUTPUT_PATH: &str = "output.csv";

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level)?;

    let config = Config::resolve(cli.config.as_deref())?;
    let parser = FeedParser::new(config.platforms);

    let rows = io::load_rows(&cli.input)?;
    info!(rows = rows.len(), input = %cli.input.display(), "loaded feed export");

    let report = parser.parse_batch(&rows);

    let output = Path::new(OUTPUT_PATH);
    io::write_records(output, &report.records)?;
    info!(
        records = report.records.len(),
        output = %output.display(),
        "wrote parsed table"
    );

    Ok(())
}
