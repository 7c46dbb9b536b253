use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::Platform;

/// One exported feed message, before parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Combined date-time, e.g. `2023-04-01T18:22:10.123+00:00`
    pub timestamp: String,
    /// Message text; only the last line carries the score sentence
    pub content: String,
    pub reaction_count: String,
}

impl RawRow {
    pub fn new(
        timestamp: impl Into<String>,
        content: impl Into<String>,
        reaction_count: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            content: content.into(),
            reaction_count: reaction_count.into(),
        }
    }
}

/// Ruleset generation of the score sentence
///
/// Era 1 sentences start with a `(era 1)` marker; everything else is era 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    One,
    Two,
}

/// Number of players in the recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    OnePlayer,
    TwoPlayers,
}

impl Era {
    pub fn as_u8(self) -> u8 {
        match self {
            Era::One => 1,
            Era::Two => 2,
        }
    }
}

impl Mode {
    pub fn as_u8(self) -> u8 {
        match self {
            Mode::OnePlayer => 1,
            Mode::TwoPlayers => 2,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for Era {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// A single structured score event
///
/// `player2` is `Some` exactly when `mode` is two players. `country` and
/// `platform` are only ever set for 1-player events that end with an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    pub date: String,
    pub time: String,
    pub era: Era,
    pub mode: Mode,
    pub player1: String,
    pub player2: Option<String>,
    pub level: String,
    /// Raw score token, not validated as a number
    pub score: String,
    pub country: Option<String>,
    pub platform: Option<Platform>,
    pub reaction_count: String,
}

impl ParsedRecord {
    /// Output columns, in order
    pub const COLUMNS: [&'static str; 11] = [
        "date",
        "time",
        "era",
        "mode",
        "player1",
        "player2",
        "level",
        "score",
        "country",
        "platform",
        "reaction_count",
    ];

    /// Flatten into output columns; absent fields become empty strings
    pub fn to_fields(&self) -> [String; 11] {
        [
            self.date.clone(),
            self.time.clone(),
            self.era.to_string(),
            self.mode.to_string(),
            self.player1.clone(),
            self.player2.clone().unwrap_or_default(),
            self.level.clone(),
            self.score.clone(),
            self.country.clone().unwrap_or_default(),
            self.platform
                .as_ref()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            self.reaction_count.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlatformName;

    fn solo_record() -> ParsedRecord {
        ParsedRecord {
            date: "2023-04-01".to_string(),
            time: "18:22:10".to_string(),
            era: Era::Two,
            mode: Mode::OnePlayer,
            player1: "Alice".to_string(),
            player2: None,
            level: "Desert".to_string(),
            score: "7".to_string(),
            country: Some("France".to_string()),
            platform: Some(Platform::Known(PlatformName::Web)),
            reaction_count: "3".to_string(),
        }
    }

    #[test]
    fn test_to_fields_blanks_absent_values() {
        let fields = solo_record().to_fields();
        assert_eq!(
            fields,
            [
                "2023-04-01",
                "18:22:10",
                "2",
                "1",
                "Alice",
                "",
                "Desert",
                "7",
                "France",
                "web",
                "3"
            ]
        );
    }

    #[test]
    fn test_serialize_era_and_mode_as_integers() {
        let json = serde_json::to_value(solo_record()).unwrap();
        assert_eq!(json["era"], 2);
        assert_eq!(json["mode"], 1);
        assert_eq!(json["player2"], serde_json::Value::Null);
        assert_eq!(json["platform"], "web");
    }
}
