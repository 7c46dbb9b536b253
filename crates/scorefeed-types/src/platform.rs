use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Canonical platform names a raw annotation token can normalize to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformName {
    Android,
    Ios,
    Windows,
    Web,
    Unknown,
}

impl PlatformName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformName::Android => "android",
            PlatformName::Ios => "ios",
            PlatformName::Windows => "windows",
            PlatformName::Web => "web",
            PlatformName::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform of a 1-player score event
///
/// Tokens that match an alias become `Known`; anything else is kept verbatim
/// as `Raw` so that new platforms show up in the output instead of being lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Known(PlatformName),
    Raw(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Known(name) => name.as_str(),
            Platform::Raw(raw) => raw,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PlatformName> for Platform {
    fn from(name: PlatformName) -> Self {
        Platform::Known(name)
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
