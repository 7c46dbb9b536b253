use crate::annotation::{Annotation, extract_annotation};
use crate::level::extract_level;
use crate::players::extract_players;
use crate::score::extract_score;
use crate::timestamp::split_timestamp;
use crate::{ParseError, PlatformAliases, Result};
use scorefeed_types::{Mode, ParsedRecord, RawRow};
use tracing::{debug, trace};

/// Outcome of parsing one feed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Parsed(ParsedRecord),
    Skipped(ParseError),
}

/// Turns feed rows into score records
///
/// Holds the platform alias table for the whole run; parsing itself is a pure
/// function of each row.
#[derive(Debug, Clone, Default)]
pub struct FeedParser {
    aliases: PlatformAliases,
}

impl FeedParser {
    pub fn new(aliases: PlatformAliases) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &PlatformAliases {
        &self.aliases
    }

    /// Parse one row into a complete record, or fail as a whole
    pub fn parse_row(&self, row: &RawRow) -> Result<ParsedRecord> {
        debug!(?row, "parsing row");

        let (date, time) = split_timestamp(&row.timestamp)?;
        let sentence = last_line(&row.content);
        trace!(sentence, "discarding everything except the last line");

        let players = extract_players(sentence)?;
        let annotation = match players.mode {
            Mode::OnePlayer => extract_annotation(sentence, &self.aliases)?,
            Mode::TwoPlayers => Annotation::default(),
        };
        let level = extract_level(sentence)?;
        let score = extract_score(sentence)?;

        let record = ParsedRecord {
            date,
            time,
            era: players.era,
            mode: players.mode,
            player1: players.player1,
            player2: players.player2,
            level,
            score,
            country: annotation.country,
            platform: annotation.platform,
            reaction_count: row.reaction_count.clone(),
        };
        debug!(?record, "parsed row");
        Ok(record)
    }

    /// Same as [`FeedParser::parse_row`], folded into an explicit outcome
    pub fn outcome(&self, row: &RawRow) -> RowOutcome {
        match self.parse_row(row) {
            Ok(record) => RowOutcome::Parsed(record),
            Err(err) => RowOutcome::Skipped(err),
        }
    }
}

/// Text after the last line break; earlier lines are decoration
fn last_line(content: &str) -> &str {
    content.rsplit('\n').next().unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorefeed_types::{Era, Platform, PlatformName};

    fn row(content: &str) -> RawRow {
        RawRow::new("2023-04-01T18:22:10.123+00:00", content, "2")
    }

    #[test]
    fn test_two_player_sentence_ignores_annotation() {
        let record = FeedParser::default()
            .parse_row(&row(
                "`A` and `B` increased their score to 42 in `Level` (US-android)",
            ))
            .unwrap();

        assert_eq!(
            record,
            ParsedRecord {
                date: "2023-04-01".to_string(),
                time: "18:22:10.123+00:00".to_string(),
                era: Era::Two,
                mode: Mode::TwoPlayers,
                player1: "A".to_string(),
                player2: Some("B".to_string()),
                level: "Level".to_string(),
                score: "42".to_string(),
                country: None,
                platform: None,
                reaction_count: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_single_player_sentence_reads_annotation() {
        let record = FeedParser::default()
            .parse_row(&row("`Alice` increased score to 7 in Desert (France - web)"))
            .unwrap();

        assert_eq!(record.mode, Mode::OnePlayer);
        assert_eq!(record.player1, "Alice");
        assert_eq!(record.player2, None);
        assert_eq!(record.level, "Desert");
        assert_eq!(record.score, "7");
        assert_eq!(record.country.as_deref(), Some("France"));
        assert_eq!(record.platform, Some(Platform::Known(PlatformName::Web)));
    }

    #[test]
    fn test_only_last_line_is_parsed() {
        let record = FeedParser::default()
            .parse_row(&row(
                "🎉 New record! 🎉\nsomeone and nobody in Nowhere\n`Alice` increased score to 7 in Desert",
            ))
            .unwrap();

        assert_eq!(record.player1, "Alice");
        assert_eq!(record.level, "Desert");
    }

    #[test]
    fn test_era_one_sentence() {
        let record = FeedParser::default()
            .parse_row(&row(
                "(era 1) `Bob` increased score to 900 in `Old Hub` (Canada - ❓)",
            ))
            .unwrap();

        assert_eq!(record.era, Era::One);
        assert_eq!(record.player1, "Bob");
        assert_eq!(record.level, "Old Hub");
        assert_eq!(record.country.as_deref(), Some("Canada"));
        assert_eq!(
            record.platform,
            Some(Platform::Known(PlatformName::Unknown))
        );
    }

    #[test]
    fn test_failure_in_any_field_fails_row() {
        let parser = FeedParser::default();

        let bad_time = RawRow::new("2023-04-01", "Alice increased score to 7 in Desert", "0");
        assert!(matches!(
            parser.outcome(&bad_time),
            RowOutcome::Skipped(ParseError::MalformedTimestamp { .. })
        ));

        assert!(matches!(
            parser.outcome(&row("Alice increased score to 7 on Desert")),
            RowOutcome::Skipped(ParseError::MissingKeyword { .. })
        ));

        assert!(matches!(
            parser.outcome(&row("Alice increased score to 7 in Desert (A-B-C)")),
            RowOutcome::Skipped(ParseError::MalformedSuffix { .. })
        ));
    }

    #[test]
    fn test_parsing_is_repeatable() {
        let parser = FeedParser::default();
        let input = row("`Alice` increased score to 7 in Desert (France - 🌐)");
        assert_eq!(parser.outcome(&input), parser.outcome(&input));
    }

    #[test]
    fn test_custom_alias_table() {
        let parser = FeedParser::new(PlatformAliases::new(vec![
            crate::PlatformAlias::new(PlatformName::Windows, &["pc"]),
        ]));
        let record = parser
            .parse_row(&row("Alice increased score to 7 in Desert (US - pc)"))
            .unwrap();
        assert_eq!(
            record.platform,
            Some(Platform::Known(PlatformName::Windows))
        );

        let record = parser
            .parse_row(&row("Alice increased score to 7 in Desert (US - web)"))
            .unwrap();
        assert_eq!(record.platform, Some(Platform::Raw("web".to_string())));
    }
}
