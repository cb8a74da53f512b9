//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::{LocationCandidate, LocationDetail, PopularCity};
use std::fmt::Write;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format_candidates(&self, candidates: &[LocationCandidate]) -> Result<String> {
        if candidates.is_empty() {
            return Ok("No locations found\n".to_string());
        }

        let mut output = String::new();
        for (i, candidate) in candidates.iter().enumerate() {
            let _ = writeln!(
                output,
                "{}. {} ({:.4}, {:.4}) [{}]",
                i + 1,
                candidate.name,
                candidate.lat,
                candidate.lon,
                candidate.place_type
            );
            let _ = writeln!(output, "   {}", candidate.full_name);
        }
        Ok(output)
    }

    fn format_detail(&self, detail: Option<&LocationDetail>) -> Result<String> {
        let Some(detail) = detail else {
            return Ok("No location found at this point\n".to_string());
        };

        let mut output = String::new();
        let _ = writeln!(output, "{}", detail.name);
        let _ = writeln!(output, "{}", detail.full_name);
        let _ = writeln!(output, "Coordinates: ({:.6}, {:.6})", detail.lat, detail.lon);
        let _ = writeln!(output, "Type: {}", detail.place_type);

        if let Some(address) = &detail.address {
            output.push_str("\nAddress:\n");
            for (key, value) in address {
                match value.as_str() {
                    Some(text) => {
                        let _ = writeln!(output, "  {}: {}", key, text);
                    }
                    None => {
                        let _ = writeln!(output, "  {}: {}", key, value);
                    }
                }
            }
        }

        Ok(output)
    }

    fn format_cities(&self, cities: &[PopularCity]) -> Result<String> {
        let mut output = String::new();
        for city in cities {
            let _ = writeln!(
                output,
                "{:<12} ({:>8.4}, {:>9.4})  {}",
                city.name, city.lat, city.lon, city.full_name
            );
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::popular_cities;
    use serde_json::json;

    #[test]
    fn test_text_candidates() {
        let candidates = vec![LocationCandidate {
            id: None,
            name: "Makassar".to_string(),
            full_name: "Makassar, Sulawesi Selatan, Indonesia".to_string(),
            lat: -5.1477,
            lon: 119.4327,
            place_type: "city".to_string(),
            importance: 0.0,
        }];

        let output = TextFormatter.format_candidates(&candidates).unwrap();
        assert!(output.starts_with("1. Makassar (-5.1477, 119.4327) [city]"));
        assert!(output.contains("Sulawesi Selatan"));
    }

    #[test]
    fn test_text_no_candidates() {
        let output = TextFormatter.format_candidates(&[]).unwrap();
        assert_eq!(output, "No locations found\n");
    }

    #[test]
    fn test_text_detail() {
        let detail = LocationDetail {
            name: "Palembang".to_string(),
            full_name: "Palembang, Sumatera Selatan, Indonesia".to_string(),
            lat: -2.9761,
            lon: 104.7754,
            address: json!({ "city": "Palembang", "postcode": 30111 })
                .as_object()
                .cloned(),
            place_type: "city".to_string(),
        };

        let output = TextFormatter.format_detail(Some(&detail)).unwrap();
        assert!(output.starts_with("Palembang\n"));
        assert!(output.contains("Type: city"));
        assert!(output.contains("  city: Palembang"));
        assert!(output.contains("  postcode: 30111"));
    }

    #[test]
    fn test_text_detail_absent() {
        let output = TextFormatter.format_detail(None).unwrap();
        assert!(output.contains("No location found"));
    }

    #[test]
    fn test_text_cities() {
        let output = TextFormatter.format_cities(popular_cities()).unwrap();
        assert_eq!(output.lines().count(), 10);
        assert!(output.lines().next().unwrap().starts_with("Jakarta"));
    }
}
