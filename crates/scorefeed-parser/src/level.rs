use crate::tokens::{ANCHOR_KEYWORD, keyword_index, strip_backticks, words};
use crate::{ParseError, Result};
use tracing::debug;

/// Level name: the tokens after `in`, up to the first one opening a parenthetical
pub fn extract_level(content: &str) -> Result<String> {
    debug!(content, "getting level name");

    let tokens = words(content);
    let anchor = keyword_index(&tokens, ANCHOR_KEYWORD, content)?;

    let level = tokens[anchor + 1..]
        .iter()
        .take_while(|token| !token.starts_with('('))
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if level.is_empty() {
        return Err(ParseError::EmptyLevel {
            content: content.to_string(),
        });
    }

    Ok(strip_backticks(&level).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_multi_word_level() {
        let level =
            extract_level("`A` and `B` increased their score to 42 in `Deep Space` (US-android)")
                .unwrap();
        assert_eq!(level, "Deep Space");
    }

    #[test]
    fn test_level_runs_to_end_without_annotation() {
        let level = extract_level("Alice increased score to 7 in Asteroid Field").unwrap();
        assert_eq!(level, "Asteroid Field");
    }

    #[test]
    fn test_level_stops_at_first_parenthetical() {
        let level = extract_level("Alice increased score to 7 in Hub (2 players mode)").unwrap();
        assert_eq!(level, "Hub");
    }

    #[test]
    fn test_first_in_token_is_anchor() {
        let level = extract_level("Alice increased score to 7 in Lost in Space").unwrap();
        assert_eq!(level, "Lost in Space");
    }

    #[test]
    fn test_missing_anchor() {
        assert!(matches!(
            extract_level("Alice increased score to 7 on Desert"),
            Err(ParseError::MissingKeyword { keyword: "in", .. })
        ));
    }

    #[test]
    fn test_nothing_after_anchor() {
        assert!(matches!(
            extract_level("Alice increased score to 7 in"),
            Err(ParseError::EmptyLevel { .. })
        ));
        assert!(matches!(
            extract_level("Alice increased score to 7 in (US-web)"),
            Err(ParseError::EmptyLevel { .. })
        ));
    }
}
