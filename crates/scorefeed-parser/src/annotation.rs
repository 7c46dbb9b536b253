use crate::{ParseError, PlatformAliases, Result};
use scorefeed_types::Platform;
use tracing::debug;

/// Country and platform read from a trailing `(Country - platform)` suffix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
    pub country: Option<String>,
    pub platform: Option<Platform>,
}

/// Parse the trailing parenthetical of a 1-player sentence
///
/// Sentences that do not end in `)` carry no annotation. Whitespace inside the
/// parentheses is ignored, so `(United States - 🪟)` yields `UnitedStates`.
pub fn extract_annotation(content: &str, aliases: &PlatformAliases) -> Result<Annotation> {
    debug!(content, "getting country and platform");

    let Some(without_paren) = content.strip_suffix(')') else {
        return Ok(Annotation::default());
    };

    let body = without_paren.rsplit('(').next().unwrap_or(without_paren);
    let body: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    let segments: Vec<&str> = body.split('-').collect();

    let annotation = match segments.as_slice() {
        [country] => Annotation {
            country: Some(country.to_string()),
            platform: None,
        },
        [country, raw_platform] => {
            let platform = aliases.normalize(raw_platform);
            debug!(raw_platform, %platform, "replaced platform");
            Annotation {
                country: Some(country.to_string()),
                platform: Some(platform),
            }
        }
        _ => {
            return Err(ParseError::MalformedSuffix {
                segments: segments.len(),
                annotation: body.clone(),
            });
        }
    };

    debug!(
        country = ?annotation.country,
        platform = ?annotation.platform,
        "got country and platform"
    );
    Ok(annotation)
}
