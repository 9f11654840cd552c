// Response format requested from the Steam Web API.

use std::fmt;
use std::str::FromStr;

use crate::error::SteamError;

/// Output format of a call. JSON is decoded and extracted; XML and VDF are
/// returned as raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Json,
    Xml,
    Vdf,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Vdf => "vdf",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SteamError;

    /// An empty tag means JSON.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "vdf" => Ok(Format::Vdf),
            other => Err(SteamError::UnsupportedFormat(other.to_string())),
        }
    }
}
