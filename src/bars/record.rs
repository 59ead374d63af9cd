// src/bars/record.rs
use crate::error::CoordinateParseError;

use super::distance::{GeoPoint, parse_coordinates};

/// One bar/cafe row.
///
/// `coordinates` is kept as the stored text and parsed on every distance
/// pass, so a corrupt cell surfaces there instead of being dropped at load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub title: String,
    pub coordinates: String,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    pub price: Option<String>,

    /// Raw `type` cell, e.g. "Cocktail bar, Pub"
    pub category: Option<String>,
    /// `category` split on commas, trimmed, empties dropped
    pub tags: Vec<String>,

    pub types: Option<String>,
    pub address: Option<String>,
    pub open_state: Option<String>,
    pub hours: Option<String>,
    pub operating_hours: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub service_options: Option<String>,

    /// Columns we don't know about, in file order
    pub extra: Vec<(String, String)>,

    /// Derived; `None` until a reference point has been set
    pub distance_km: Option<f64>,
}

impl Record {
    pub fn new(title: impl Into<String>, coordinates: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            coordinates: coordinates.into(),
            ..Self::default()
        }
    }

    /// Set the `type` cell and re-derive the tag tokens.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.tags = split_tags(&category);
        self.category = Some(category);
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Token-exact tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t == tag)
    }

    pub fn point(&self) -> Result<GeoPoint, CoordinateParseError> {
        parse_coordinates(&self.coordinates).ok_or_else(|| CoordinateParseError {
            title: self.title.clone(),
            raw: self.coordinates.clone(),
        })
    }

    /// Full record as (column, value) pairs, empty fields skipped.
    pub fn details(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = Vec::new();
        let mut push = |k: &str, v: Option<String>| {
            if let Some(v) = v.filter(|v| !v.is_empty()) {
                out.push((s!(k), v));
            }
        };

        push("title", Some(self.title.clone()));
        push("gps_coordinates", Some(self.coordinates.clone()));
        push("rating", self.rating.map(|r| r.to_string()));
        push("reviews", self.reviews.map(|r| r.to_string()));
        push("price", self.price.clone());
        push("type", self.category.clone());
        push("types", self.types.clone());
        push("address", self.address.clone());
        push("open_state", self.open_state.clone());
        push("hours", self.hours.clone());
        push("operating_hours", self.operating_hours.clone());
        push("phone", self.phone.clone());
        push("website", self.website.clone());
        push("service_options", self.service_options.clone());
        for (k, v) in &self.extra {
            push(k, Some(v.clone()));
        }
        push("distance", self.distance_km.map(|d| format!("{d:.2} km")));
        out
    }
}

/// Split a `type` cell into trimmed, non-empty tokens.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed_tokens() {
        let r = Record::new("A", "52.0, 4.0").with_category(" Cocktail bar ,Pub,, ");
        assert_eq!(r.tags, strings!["Cocktail bar", "Pub"]);
        assert!(r.has_tag("Pub"));
        assert!(!r.has_tag("Bar"));
        assert!(!r.has_tag("Cocktail"));
    }

    #[test]
    fn details_skip_missing_fields() {
        let r = Record::new("A", "52.0, 4.0").with_website("https://a.example");
        let keys: Vec<String> = r.details().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, strings!["title", "gps_coordinates", "website"]);
    }
}
