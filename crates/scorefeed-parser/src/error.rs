use thiserror::Error;

/// Result type for scorefeed-parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Reasons a single feed row could not be turned into a record
///
/// Every variant is local to one row: the batch driver logs it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Timestamp has no `T` between date and time
    #[error("malformed timestamp (no 'T' separator): {timestamp:?}")]
    MalformedTimestamp { timestamp: String },

    /// Fewer than three tokens left once the era marker is removed
    #[error("malformed usernames (need at least 3 tokens): {content:?}")]
    MalformedUsername { content: String },

    /// Country/platform annotation split into more than two segments
    #[error("malformed suffix ({segments} dash-separated segments): {annotation:?}")]
    MalformedSuffix { annotation: String, segments: usize },

    /// Anchor keyword not present as a standalone token
    #[error("missing keyword {keyword:?}: {content:?}")]
    MissingKeyword {
        keyword: &'static str,
        content: String,
    },

    /// Anchor keyword is the first token, so nothing precedes it
    #[error("no score token before anchor keyword: {content:?}")]
    MissingScore { content: String },

    /// Nothing between the anchor keyword and the annotation
    #[error("empty level name: {content:?}")]
    EmptyLevel { content: String },
}
