//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::{LocationCandidate, LocationDetail, PopularCity};

/// JSON formatter - outputs results as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }

    fn format_candidates(&self, candidates: &[LocationCandidate]) -> Result<String> {
        Ok(serde_json::to_string_pretty(candidates)?)
    }

    fn format_detail(&self, detail: Option<&LocationDetail>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&detail)?)
    }

    fn format_cities(&self, cities: &[PopularCity]) -> Result<String> {
        Ok(serde_json::to_string_pretty(cities)?)
    }
}
