//! Primary locale
//!
//! Drives the `accept-language` preference sent upstream and the language of
//! user-facing messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported primary languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Self::Indonesian => "id",
            Self::English => "en",
        }
    }

    /// Language preference list: primary locale first, then English
    pub fn accept_language(self) -> String {
        match self {
            Self::English => "en".to_string(),
            other => format!("{},en", other.code()),
        }
    }

    /// Display name used when nothing better is known about a place
    pub fn unknown_place(self) -> &'static str {
        match self {
            Self::Indonesian => "Tidak dikenal",
            Self::English => "Unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" | "indonesian" => Ok(Self::Indonesian),
            "en" | "english" => Ok(Self::English),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_language() {
        assert_eq!(Language::Indonesian.accept_language(), "id,en");
        assert_eq!(Language::English.accept_language(), "en");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ID".parse::<Language>().unwrap(), Language::Indonesian);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"en\"");
        let parsed: Language = serde_json::from_str("\"id\"").unwrap();
        assert_eq!(parsed, Language::Indonesian);
    }
}
