//! Parser for the scores feed written by the game's Discord bot.
//!
//! Each feed message is one templated English sentence, e.g.
//!
//! ```text
//! `A` and `B` increased their score to 42 in `Level`
//! (era 1) `Alice` increased score to 7 in Desert (France - web)
//! ```
//!
//! The template varies by ruleset era, player count, the optional trailing
//! `(country - platform)` annotation and backtick quoting. Fields are found
//! positionally, anchored on the `in` token.
//!
//! ```
//! use scorefeed_parser::FeedParser;
//! use scorefeed_types::RawRow;
//!
//! let parser = FeedParser::default();
//! let row = RawRow::new(
//!     "2023-04-01T18:22:10",
//!     "`Alice` increased score to 7 in Desert (France - web)",
//!     "0",
//! );
//! let record = parser.parse_row(&row)?;
//! assert_eq!(record.level, "Desert");
//! # Ok::<(), scorefeed_parser::ParseError>(())
//! ```

// Error types
pub mod error;

// Shared token helpers
pub mod tokens;

// Field extractors
pub mod annotation;
pub mod level;
pub mod players;
pub mod score;
pub mod timestamp;

// Platform alias table
pub mod aliases;

// Row orchestration and batch driver
pub mod batch;
pub mod row;

pub use aliases::{PlatformAlias, PlatformAliases};
pub use annotation::{Annotation, extract_annotation};
pub use batch::BatchReport;
pub use error::{ParseError, Result};
pub use level::extract_level;
pub use players::{Players, extract_players};
pub use row::{FeedParser, RowOutcome};
pub use score::extract_score;
pub use timestamp::split_timestamp;
