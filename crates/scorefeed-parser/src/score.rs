use crate::tokens::{ANCHOR_KEYWORD, keyword_index, words};
use crate::{ParseError, Result};
use tracing::debug;

/// Final score: the token right before `in`, kept as written
pub fn extract_score(content: &str) -> Result<String> {
    debug!(content, "getting player's final score");

    let tokens = words(content);
    let anchor = keyword_index(&tokens, ANCHOR_KEYWORD, content)?;

    let score = anchor
        .checked_sub(1)
        .map(|index| tokens[index].to_string())
        .ok_or_else(|| ParseError::MissingScore {
            content: content.to_string(),
        })?;

    Ok(score)
}
