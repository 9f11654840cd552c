// Error types for the Steam Web API client.
// Covers configuration, dispatch, transport, and extraction failures.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Broad failure category, stable across error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed API key.
    Configuration,
    /// Unrecognized operation tag.
    InvalidOperation,
    /// Format outside json/xml/vdf.
    UnsupportedFormat,
    /// Network failure, non-2xx status, or undecodable body.
    Transport,
    /// Requested field path absent from the decoded body, or typed data
    /// asked of a text payload.
    Extraction,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::InvalidOperation => "invalid operation",
            ErrorKind::UnsupportedFormat => "unsupported format",
            ErrorKind::Transport => "transport",
            ErrorKind::Extraction => "extraction",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum SteamError {
    #[error("Missing STEAM_KEY: a Steam Web API key is required outside test mode")]
    MissingKey,

    #[error("Invalid Steam Web API key: expected 32 alphanumeric characters")]
    InvalidKey,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid method: {0}")]
    InvalidOperation(String),

    #[error("Unknown or unsupported format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Steam API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field {missing:?} not found while extracting {path:?}")]
    ExtractionMiss { path: String, missing: String },

    #[error("Cannot decode raw XML/VDF text; request JSON to get typed data")]
    TextPayload,

    #[error("Cached {kind} failure: {message}")]
    Replayed { kind: ErrorKind, message: String },
}

impl SteamError {
    /// Category of this error, for callers that branch on failure type.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SteamError::MissingKey | SteamError::InvalidKey | SteamError::Config(_) => {
                ErrorKind::Configuration
            }
            SteamError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            SteamError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            SteamError::Http(_) | SteamError::Status { .. } | SteamError::Json(_) => {
                ErrorKind::Transport
            }
            SteamError::ExtractionMiss { .. } | SteamError::TextPayload => ErrorKind::Extraction,
            SteamError::Replayed { kind, .. } => *kind,
        }
    }

    /// Whether this error was replayed from the response cache.
    pub fn is_replayed(&self) -> bool {
        matches!(self, SteamError::Replayed { .. })
    }
}

pub type Result<T> = std::result::Result<T, SteamError>;
