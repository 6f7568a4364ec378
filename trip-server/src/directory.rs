//! Static city directory.
//!
//! Authoritative first tier of the geocoder: a fixed table mapping city
//! names to coordinates and country data. Lookup is by exact trimmed name,
//! with no case-folding or fuzzy matching. A miss just tells the caller
//! to fall back to network geocoding.

use std::collections::HashMap;

use crate::domain::{Coordinates, CountryCode};

/// Everything the directory knows about one city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityInfo {
    /// City center coordinates.
    pub coordinates: Coordinates,

    /// Country name, or "unknown" for network-geocoded results.
    pub country: String,

    /// ISO-3166 alpha-2 country code.
    pub country_code: CountryCode,
}

/// A fixed mapping from city name to [`CityInfo`].
#[derive(Debug, Clone, Default)]
pub struct CityDirectory {
    cities: HashMap<&'static str, CityInfo>,
}

impl CityDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a city by exact trimmed name.
    pub fn lookup(&self, name: &str) -> Option<&CityInfo> {
        self.cities.get(name.trim())
    }

    /// Number of known cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Builder for assembling a city directory.
///
/// Entries with out-of-range coordinates or malformed country codes are
/// skipped rather than panicking, so a bad row in the table degrades to a
/// directory miss.
#[derive(Debug, Default)]
pub struct CityDirectoryBuilder {
    inner: CityDirectory,
}

impl CityDirectoryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one city entry.
    pub fn add(
        mut self,
        name: &'static str,
        latitude: f64,
        longitude: f64,
        country: &str,
        country_code: &str,
    ) -> Self {
        if let (Ok(coordinates), Ok(code)) = (
            Coordinates::new(latitude, longitude),
            CountryCode::parse(country_code),
        ) {
            self.inner.cities.insert(
                name,
                CityInfo {
                    coordinates,
                    country: country.to_string(),
                    country_code: code,
                },
            );
        }
        self
    }

    /// Build the directory.
    pub fn build(self) -> CityDirectory {
        self.inner
    }
}

/// The built-in city table.
///
/// Korean-named keys covering the domestic market plus the international
/// destinations the planner ships with.
pub fn builtin_cities() -> CityDirectory {
    CityDirectoryBuilder::new()
        // South Korea
        .add("서울", 37.5665, 126.9780, "South Korea", "KR")
        .add("부산", 35.1796, 129.0756, "South Korea", "KR")
        .add("인천", 37.4563, 126.7052, "South Korea", "KR")
        .add("대구", 35.8714, 128.6014, "South Korea", "KR")
        .add("대전", 36.3504, 127.3845, "South Korea", "KR")
        .add("광주", 35.1595, 126.8526, "South Korea", "KR")
        .add("울산", 35.5384, 129.3114, "South Korea", "KR")
        .add("수원", 37.2636, 127.0286, "South Korea", "KR")
        .add("제주", 33.4996, 126.5312, "South Korea", "KR")
        .add("강릉", 37.7519, 128.8761, "South Korea", "KR")
        .add("경주", 35.8562, 129.2247, "South Korea", "KR")
        .add("전주", 35.8242, 127.1480, "South Korea", "KR")
        .add("청주", 36.6424, 127.4890, "South Korea", "KR")
        .add("춘천", 37.8813, 127.7300, "South Korea", "KR")
        .add("포항", 36.0190, 129.3435, "South Korea", "KR")
        // Japan
        .add("도쿄", 35.6762, 139.6503, "Japan", "JP")
        .add("오사카", 34.6937, 135.5023, "Japan", "JP")
        .add("교토", 35.0116, 135.7681, "Japan", "JP")
        .add("후쿠오카", 33.5904, 130.4017, "Japan", "JP")
        .add("삿포로", 43.0642, 141.3469, "Japan", "JP")
        .add("나고야", 35.1815, 136.9066, "Japan", "JP")
        .add("요코하마", 35.4437, 139.6380, "Japan", "JP")
        // China
        .add("베이징", 39.9042, 116.4074, "China", "CN")
        .add("상하이", 31.2304, 121.4737, "China", "CN")
        .add("광저우", 23.1291, 113.2644, "China", "CN")
        .add("선전", 22.5431, 114.0579, "China", "CN")
        // Southeast Asia
        .add("방콕", 13.7563, 100.5018, "Thailand", "TH")
        .add("싱가포르", 1.3521, 103.8198, "Singapore", "SG")
        .add("타이페이", 25.0330, 121.5654, "Taiwan", "TW")
        .add("홍콩", 22.3193, 114.1694, "Hong Kong", "HK")
        .add("마닐라", 14.5995, 120.9842, "Philippines", "PH")
        .add("하노이", 21.0285, 105.8542, "Vietnam", "VN")
        .add("호치민", 10.8231, 106.6297, "Vietnam", "VN")
        .add("쿠알라룸푸르", 3.1390, 101.6869, "Malaysia", "MY")
        // Further afield
        .add("뉴욕", 40.7128, -74.0060, "United States", "US")
        .add("런던", 51.5074, -0.1278, "United Kingdom", "GB")
        .add("파리", 48.8566, 2.3522, "France", "FR")
        .add("로마", 41.9028, 12.4964, "Italy", "IT")
        .add("시드니", -33.8688, 151.2093, "Australia", "AU")
        .build()
}
