// src/geocode.rs
//
// Address → coordinates. `Geocoder` is the seam; `NominatimGeocoder` talks to
// OpenStreetMap, `StaticGeocoder` answers from a fixed table (tests, offline).

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::bars::GeoPoint;
use crate::config::options::GeocoderOptions;
use crate::error::GeocodeError;

pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the service answered but found nothing.
    fn geocode(&self, text: &str) -> Result<Option<GeoPoint>, GeocodeError>;
}

/// Geocode or fail with `NotFound`. Blank input never reaches the service.
pub fn resolve(geocoder: &dyn Geocoder, text: &str) -> Result<GeoPoint, GeocodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GeocodeError::NotFound(s!()));
    }
    match geocoder.geocode(text)? {
        Some(p) => {
            logf!("Geocode: '{}' → ({:.5}, {:.5})", text, p.lat, p.lon);
            Ok(p)
        }
        None => {
            logf!("Geocode: '{}' not found", text);
            Err(GeocodeError::NotFound(s!(text)))
        }
    }
}

/* ---------------- Nominatim ---------------- */

pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
}

/// Nominatim returns coordinates as strings.
#[derive(Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(opts: &GeocoderOptions) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: s!(opts.base_url.trim_end_matches('/')),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, text: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let url = join!(&self.base_url, "/search");
        logd!("Geocode: GET {} q='{}'", url, text);

        let resp = self
            .client
            .get(&url)
            .query(&[("q", text), ("format", "json"), ("limit", "1")])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::Service(format!("HTTP {}", status.as_u16())));
        }

        let places: Vec<Place> = resp.json()?;
        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let point = match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => GeoPoint::new(lat, lon),
            _ => {
                return Err(GeocodeError::Service(format!(
                    "bad coordinates in response: {}, {}",
                    place.lat, place.lon
                )));
            }
        };
        Ok(Some(point))
    }
}

/* ---------------- Static table ---------------- */

/// Case-insensitive, whitespace-trimmed lookup table.
#[derive(Clone, Debug, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, GeoPoint>,
}

impl StaticGeocoder {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, address: &str, lat: f64, lon: f64) -> Self {
        self.places.insert(key(address), GeoPoint::new(lat, lon));
        self
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, text: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        Ok(self.places.get(&key(text)).copied())
    }
}

fn key(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_lookup_is_case_insensitive() {
        let g = StaticGeocoder::new().with("Markt 1, Delft", 52.0116, 4.3593);
        let p = resolve(&g, "  markt 1, DELFT ").unwrap();
        assert_eq!(p, GeoPoint::new(52.0116, 4.3593));
    }

    #[test]
    fn miss_and_blank_are_not_found() {
        let g = StaticGeocoder::new();
        assert!(matches!(resolve(&g, "Nowhere"), Err(GeocodeError::NotFound(_))));
        assert!(matches!(resolve(&g, "   "), Err(GeocodeError::NotFound(_))));
    }
}
