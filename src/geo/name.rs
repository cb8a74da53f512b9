//! Display-name resolution
//!
//! Picks the short name shown for a place. A named locality wins over an
//! administrative grouping, and both win over truncating the full address.

use crate::constants::lookup::ADDRESS_NAME_FIELDS;
use crate::geo::place::RawPlace;
use crate::locale::Language;
use serde_json::{Map, Value};

/// Best short display name for a raw record
///
/// Priority:
/// 1. `namedetails.name`
/// 2. the first non-empty address field in [`ADDRESS_NAME_FIELDS`] order
/// 3. the first comma-separated segment of `display_name`
/// 4. the language's "unknown" string
pub fn resolve_name(place: &RawPlace, language: Language) -> String {
    place
        .namedetails
        .as_ref()
        .and_then(|details| non_empty(details, "name"))
        .or_else(|| {
            let address = place.address.as_ref()?;
            ADDRESS_NAME_FIELDS
                .iter()
                .find_map(|field| non_empty(address, field))
        })
        .or_else(|| {
            place
                .display_name
                .as_deref()
                .and_then(|name| name.split(',').next())
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
        })
        .unwrap_or_else(|| language.unknown_place())
        .to_string()
}

fn non_empty<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
