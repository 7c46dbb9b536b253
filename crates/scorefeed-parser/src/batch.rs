use crate::{FeedParser, RowOutcome};
use scorefeed_types::{ParsedRecord, RawRow};
use tracing::{debug, info, warn};

/// Result of running a whole export through the parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Parsed records, in input order
    pub records: Vec<ParsedRecord>,
    pub skipped: usize,
    pub total: usize,
}

impl FeedParser {
    /// Parse every row in order, dropping rows that fail
    ///
    /// A failed row is logged with its content and the reason and is never
    /// retried. Output order is input order with the failed rows removed.
    pub fn parse_batch(&self, rows: &[RawRow]) -> BatchReport {
        let total = rows.len();
        let progress_step = (total / 100).max(1);
        let mut report = BatchReport {
            records: Vec::with_capacity(total),
            skipped: 0,
            total,
        };

        for (index, row) in rows.iter().enumerate() {
            match self.outcome(row) {
                RowOutcome::Parsed(record) => report.records.push(record),
                RowOutcome::Skipped(err) => {
                    warn!(content = %row.content, error = %err, "skipping row");
                    report.skipped += 1;
                }
            }

            if index % progress_step == 0 {
                let done = index + 1;
                debug!(
                    "parsed {}/{} ({}%) rows",
                    done,
                    total,
                    done * 100 / total
                );
            }
        }

        info!(
            parsed = report.records.len(),
            skipped = report.skipped,
            total,
            "finished parsing feed"
        );
        report
    }
}
