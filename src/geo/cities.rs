//! Popular cities shortcut list
//!
//! Fixed coordinates for quick selection without any network lookup.

use serde::Serialize;

/// A well-known city with precomputed coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularCity {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub full_name: &'static str,
}

const fn city(name: &'static str, lat: f64, lon: f64, full_name: &'static str) -> PopularCity {
    PopularCity {
        name,
        lat,
        lon,
        full_name,
    }
}

static POPULAR_CITIES: [PopularCity; 10] = [
    city("Jakarta", -6.2088, 106.8456, "Jakarta, Indonesia"),
    city("Bogor", -6.5950, 106.8161, "Bogor, Jawa Barat, Indonesia"),
    city("Bandung", -6.9175, 107.6191, "Bandung, Jawa Barat, Indonesia"),
    city("Surabaya", -7.2575, 112.7521, "Surabaya, Jawa Timur, Indonesia"),
    city("Yogyakarta", -7.7956, 110.3695, "Yogyakarta, Indonesia"),
    city("Medan", 3.5952, 98.6722, "Medan, Sumatera Utara, Indonesia"),
    city("Semarang", -6.9669, 110.4203, "Semarang, Jawa Tengah, Indonesia"),
    city("Makassar", -5.1477, 119.4327, "Makassar, Sulawesi Selatan, Indonesia"),
    city("Palembang", -2.9761, 104.7754, "Palembang, Sumatera Selatan, Indonesia"),
    city("Tangerang", -6.1701, 106.6403, "Tangerang, Banten, Indonesia"),
];

/// The shortcut list, always in the same order
pub fn popular_cities() -> &'static [PopularCity] {
    &POPULAR_CITIES
}
