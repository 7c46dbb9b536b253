//! Tokenizer primitives shared by the field extractors.

use crate::{ParseError, Result};

/// Literal token that separates the score from the level name
pub const ANCHOR_KEYWORD: &str = "in";

/// Split on any run of whitespace, dropping empty tokens
pub fn words(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

/// Remove one pair of surrounding backticks
///
/// Only strips when the text both starts and ends with a backtick. A lone
/// backtick counts as both ends and collapses to an empty string.
pub fn strip_backticks(text: &str) -> &str {
    if text.starts_with('`') && text.ends_with('`') {
        if text.len() == 1 {
            ""
        } else {
            &text[1..text.len() - 1]
        }
    } else {
        text
    }
}

/// Index of the first token exactly equal to `keyword`
pub fn keyword_index(tokens: &[&str], keyword: &'static str, content: &str) -> Result<usize> {
    tokens
        .iter()
        .position(|token| *token == keyword)
        .ok_or_else(|| ParseError::MissingKeyword {
            keyword,
            content: content.to_string(),
        })
}
