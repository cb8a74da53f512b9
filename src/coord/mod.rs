//! Coordinates and coordinate validation

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse and validate a latitude/longitude pair given as text
    pub fn parse(lat: &str, lon: &str) -> Result<Self> {
        let lat: f64 = lat.trim().parse().map_err(|_| {
            Error::InvalidCoordinates(format!("Latitude {:?} is not a number", lat))
        })?;
        let lon: f64 = lon.trim().parse().map_err(|_| {
            Error::InvalidCoordinates(format!("Longitude {:?} is not a number", lon))
        })?;
        let coords = Self::new(lat, lon);
        coords.validate()?;
        Ok(coords)
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }

    /// Whether both components are in range
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.lat, self.lon)
    }
}

/// True if both values are numbers inside the latitude/longitude bounds
///
/// Bounds are inclusive. NaN fails every range check, so it is rejected.
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Same check for untyped JSON input: anything but a JSON number is invalid
pub fn is_valid_coordinate_value(lat: &Value, lon: &Value) -> bool {
    match (lat, lon) {
        (Value::Number(lat), Value::Number(lon)) => match (lat.as_f64(), lon.as_f64()) {
            (Some(lat), Some(lon)) => is_valid_coordinate(lat, lon),
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_coordinate() {
        assert!(is_valid_coordinate(-6.2088, 106.8456));
        assert!(is_valid_coordinate(0.0, 0.0));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(is_valid_coordinate(90.0, 180.0));
        assert!(is_valid_coordinate(-90.0, -180.0));
    }

    #[test]
    fn test_out_of_range() {
        assert!(!is_valid_coordinate(91.0, 0.0));
        assert!(!is_valid_coordinate(0.0, -181.0));
        assert!(!is_valid_coordinate(-90.0001, 0.0));
    }

    #[test]
    fn test_non_numeric() {
        assert!(!is_valid_coordinate(f64::NAN, 0.0));
        assert!(!is_valid_coordinate(0.0, f64::INFINITY));
        assert!(!is_valid_coordinate_value(&json!("a"), &json!(0)));
        assert!(!is_valid_coordinate_value(&json!("1.5"), &json!(0)));
        assert!(!is_valid_coordinate_value(&json!(null), &json!(0)));
        assert!(!is_valid_coordinate_value(&json!(0), &Value::Null));
    }

    #[test]
    fn test_json_numbers() {
        assert!(is_valid_coordinate_value(&json!(-6.2088), &json!(106.8456)));
        assert!(is_valid_coordinate_value(&json!(0), &json!(0)));
        assert!(!is_valid_coordinate_value(&json!(91), &json!(0)));
    }

    #[test]
    fn test_parse() {
        let coords = Coordinates::parse("-6.2088", " 106.8456 ").unwrap();
        assert_eq!(coords, Coordinates::new(-6.2088, 106.8456));

        assert!(matches!(
            Coordinates::parse("a", "0"),
            Err(Error::InvalidCoordinates(_))
        ));
        assert!(Coordinates::parse("0", "-181").is_err());
        assert!(Coordinates::parse("NaN", "0").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Coordinates::new(91.0, 0.0).validate().is_err());
        assert!(Coordinates::new(10.0, 10.0).validate().is_ok());
        assert!(!Coordinates::new(0.0, 200.0).is_valid());
    }
}
