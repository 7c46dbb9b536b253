use scorefeed_types::{Platform, PlatformName};
use serde::{Deserialize, Serialize};

/// Raw tokens that all mean the same canonical platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAlias {
    pub name: PlatformName,
    pub aliases: Vec<String>,
}

impl PlatformAlias {
    pub fn new(name: PlatformName, aliases: &[&str]) -> Self {
        Self {
            name,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Ordered, read-only lookup from raw platform tokens to canonical names
///
/// Matching is exact (case and symbols included) and the first entry that
/// lists a token wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformAliases {
    entries: Vec<PlatformAlias>,
}

impl PlatformAliases {
    pub fn new(entries: Vec<PlatformAlias>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PlatformAlias] {
        &self.entries
    }

    /// Canonical name for `token`, if any entry lists it
    pub fn lookup(&self, token: &str) -> Option<PlatformName> {
        self.entries
            .iter()
            .find(|entry| entry.aliases.iter().any(|alias| alias == token))
            .map(|entry| entry.name)
    }

    /// Map a raw token to its canonical platform, keeping unknown tokens verbatim
    pub fn normalize(&self, token: &str) -> Platform {
        match self.lookup(token) {
            Some(name) => Platform::Known(name),
            None => Platform::Raw(token.to_string()),
        }
    }
}

impl Default for PlatformAliases {
    /// Aliases the scores bot has been seen to emit
    ///
    /// The empty string is listed under `ios`: an annotation such as
    /// `(US-)` therefore reads as iOS.
    fn default() -> Self {
        Self::new(vec![
            PlatformAlias::new(PlatformName::Android, &["Android", ":android:", "<:android:"]),
            PlatformAlias::new(PlatformName::Ios, &[":ios:", ""]),
            PlatformAlias::new(PlatformName::Windows, &["🪟"]),
            PlatformAlias::new(PlatformName::Web, &["🌐", "web"]),
            PlatformAlias::new(PlatformName::Unknown, &["❓"]),
        ])
    }
}
