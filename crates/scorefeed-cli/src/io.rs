use anyhow::{Context, Result, bail};
use scorefeed_types::{ParsedRecord, RawRow};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Minimum columns in a channel export row
const EXPORT_COLUMNS: usize = 6;

const TIMESTAMP_COLUMN: usize = 2;
const CONTENT_COLUMN: usize = 3;
const REACTIONS_COLUMN: usize = 5;

/// Read the channel export at `path`, skipping its header row
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    debug!(path = %path.display(), "getting data");

    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_rows(file).with_context(|| format!("failed to read {}", path.display()))
}

/// Read export rows from any CSV source
///
/// Columns 2, 3 and 5 are the timestamp, message content and reaction count;
/// the others (author columns, attachments) are ignored.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() < EXPORT_COLUMNS {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            bail!(
                "line {}: expected at least {} columns, found {}",
                line,
                EXPORT_COLUMNS,
                record.len()
            );
        }

        rows.push(RawRow::new(
            &record[TIMESTAMP_COLUMN],
            &record[CONTENT_COLUMN],
            &record[REACTIONS_COLUMN],
        ));
    }

    Ok(rows)
}

/// Write parsed records to `path` as headerless CSV
pub fn write_records(path: &Path, records: &[ParsedRecord]) -> Result<()> {
    debug!(path = %path.display(), count = records.len(), "writing parsed data");

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_records_to(file, records).with_context(|| format!("failed to write {}", path.display()))
}

pub fn write_records_to<W: Write>(writer: W, records: &[ParsedRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for record in records {
        wtr.write_record(record.to_fields())?;
    }

    wtr.flush()?;
    Ok(())
}
