use crate::{ParseError, Result};
use tracing::debug;

/// Split `<date>T<time>` at the first `T`
///
/// Neither half is validated; feed exports are trusted to carry ISO-8601-like
/// stamps and the parts are passed through as text.
pub fn split_timestamp(timestamp: &str) -> Result<(String, String)> {
    debug!(timestamp, "parsing time");

    let (date, time) = timestamp
        .split_once('T')
        .ok_or_else(|| ParseError::MalformedTimestamp {
            timestamp: timestamp.to_string(),
        })?;

    Ok((date.to_string(), time.to_string()))
}
