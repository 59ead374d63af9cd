// src/bars/distance.rs
use serde::Deserialize;

/// Mean Earth radius (IUGG), km.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle distance between two lat/lon pairs (degrees), in km.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordRepr {
    Object { latitude: f64, longitude: f64 },
    Pair([f64; 2]),
}

/// Parse a stored coordinate cell.
///
/// Accepted shapes:
/// - `{"latitude": 52.01, "longitude": 4.36}` (also with single quotes)
/// - `[52.01, 4.36]`
/// - `52.01, 4.36`
pub fn parse_coordinates(raw: &str) -> Option<GeoPoint> {
    let raw = raw.trim();
    if raw.is_empty() { return None; }

    let point = if raw.starts_with('{') || raw.starts_with('[') {
        let normalized = raw.replace('\'', "\"");
        match serde_json::from_str::<CoordRepr>(&normalized).ok()? {
            CoordRepr::Object { latitude, longitude } => GeoPoint::new(latitude, longitude),
            CoordRepr::Pair([lat, lon]) => GeoPoint::new(lat, lon),
        }
    } else {
        let (lat, lon) = raw.split_once(',')?;
        GeoPoint::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?)
    };

    point.is_valid().then_some(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_coordinate_shapes() {
        let want = GeoPoint::new(52.0116, 4.3571);
        assert_eq!(parse_coordinates("{'latitude': 52.0116, 'longitude': 4.3571}"), Some(want));
        assert_eq!(parse_coordinates(r#"{"longitude": 4.3571, "latitude": 52.0116}"#), Some(want));
        assert_eq!(parse_coordinates("[52.0116, 4.3571]"), Some(want));
        assert_eq!(parse_coordinates(" 52.0116 , 4.3571 "), Some(want));
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert_eq!(parse_coordinates(""), None);
        assert_eq!(parse_coordinates("{'latitude': 'x'}"), None);
        assert_eq!(parse_coordinates("somewhere"), None);
        assert_eq!(parse_coordinates("91.0, 4.0"), None);
        assert_eq!(parse_coordinates("[52.0]"), None);
    }

    #[test]
    fn haversine_known_distance() {
        // Delft → Rotterdam Centraal, roughly 12 km
        let d = haversine_km(52.0116, 4.3571, 51.9244, 4.4690);
        assert!(d > 11.0 && d < 13.0, "{d}");
        assert_eq!(haversine_km(52.0, 4.0, 52.0, 4.0), 0.0);
    }
}
