//! Error types for foresky-geo

use crate::locale::Language;
use std::fmt;
use thiserror::Error;

/// Main error type for foresky-geo operations
#[derive(Error, Debug)]
pub enum Error {
    /// A search or reverse lookup failed; carries only a user-facing message
    #[error("{0}")]
    Lookup(LookupError),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geo error: {0}")]
    Geo(String),
}

impl Error {
    /// Build a lookup failure of the given kind, localized for `language`
    pub fn lookup(kind: LookupKind, language: Language) -> Self {
        Self::Lookup(LookupError { kind, language })
    }

    /// The lookup kind, if this is a lookup failure
    pub fn lookup_kind(&self) -> Option<LookupKind> {
        match self {
            Self::Lookup(err) => Some(err.kind),
            _ => None,
        }
    }
}

/// Which lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Forward search (text query to candidates)
    Search,
    /// Reverse lookup (coordinates to place)
    Detail,
}

impl LookupKind {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            Self::Search => "SEARCH_FAILED",
            Self::Detail => "DETAIL_FAILED",
        }
    }

    /// User-facing message in the given language
    pub fn message(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Search, Language::Indonesian) => {
                "Gagal mencari lokasi. Periksa koneksi internet atau coba lagi nanti."
            }
            (Self::Search, Language::English) => {
                "Failed to search locations. Check your internet connection or try again later."
            }
            (Self::Detail, Language::Indonesian) => "Gagal mendapatkan detail lokasi.",
            (Self::Detail, Language::English) => "Failed to get location details.",
        }
    }
}

/// A failed lookup, stripped of its underlying cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupError {
    pub kind: LookupKind,
    pub language: Language,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message(self.language))
    }
}

/// Result type alias for foresky-geo operations
pub type Result<T> = std::result::Result<T, Error>;
