//! Output formatters
//!
//! Provides trait-based output formatting for lookup results.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::geo::{LocationCandidate, LocationDetail, PopularCity};
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format forward search results
    fn format_candidates(&self, candidates: &[LocationCandidate]) -> Result<String>;

    /// Format a reverse lookup result (None when nothing was found)
    fn format_detail(&self, detail: Option<&LocationDetail>) -> Result<String>;

    /// Format the popular cities list
    fn format_cities(&self, cities: &[PopularCity]) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Pretty-printed JSON".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
    ]
}
