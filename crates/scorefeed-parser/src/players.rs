use crate::tokens::{strip_backticks, words};
use crate::{ParseError, Result};
use scorefeed_types::{Era, Mode};
use tracing::debug;

/// Marker that older sentences carry before the player names
pub const ERA_ONE_MARKER: &str = "(era 1)";

/// Marker of an older bot template that left out `and` in 2-player sentences
pub const TWO_PLAYERS_MARKER: &str = "(2 players mode)";

/// Word joining the two names of a 2-player sentence
const PLAYER_SEPARATOR: &str = "and";

/// Era, mode and names taken from the head of a score sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    pub era: Era,
    pub mode: Mode,
    pub player1: String,
    pub player2: Option<String>,
}

/// Read era, mode and player names from a single-line score sentence
///
/// Names are positional: token 0 and token 2 once the two `(era 1)` marker
/// tokens are dropped. A `(2 players mode)` marker anywhere forces 2-player
/// mode even when the `and` separator is missing.
pub fn extract_players(content: &str) -> Result<Players> {
    debug!(content, "getting usernames");

    let all_tokens = words(content);
    let (era, tokens) = if content.contains(ERA_ONE_MARKER) {
        (Era::One, all_tokens.get(2..).unwrap_or_default())
    } else {
        (Era::Two, all_tokens.as_slice())
    };
    debug!(era = era.as_u8(), ?tokens, "got era");

    if tokens.len() < 3 {
        return Err(ParseError::MalformedUsername {
            content: content.to_string(),
        });
    }

    let player1 = strip_backticks(tokens[0]).to_string();
    let second = strip_backticks(tokens[2]).to_string();

    let mode = if tokens[1] == PLAYER_SEPARATOR || content.contains(TWO_PLAYERS_MARKER) {
        Mode::TwoPlayers
    } else {
        Mode::OnePlayer
    };
    let player2 = match mode {
        Mode::TwoPlayers => Some(second),
        Mode::OnePlayer => None,
    };

    debug!(mode = mode.as_u8(), %player1, ?player2, "got usernames");
    Ok(Players {
        era,
        mode,
        player1,
        player2,
    })
}
