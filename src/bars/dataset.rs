// src/bars/dataset.rs
use std::collections::HashSet;
use std::path::Path;

use crate::error::{CoordinateParseError, LoadError};
use crate::store::{self, DataSet};

use super::distance::GeoPoint;
use super::record::{Record, split_tags};

/// Ordered bar records plus the distinct tag list.
///
/// Only `distance_km` on each record changes after load, and only through
/// [`Dataset::compute_distances`].
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
    tags: Vec<String>,
    reference: Option<GeoPoint>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let table = store::load_table(path)?;
        let ds = Self::from_table(&table)?;
        logf!("Dataset: loaded {} ({} bars, {} tags)", path.display(), ds.len(), ds.tags.len());
        Ok(ds)
    }

    /// Map a raw table onto typed records.
    pub fn from_table(table: &DataSet) -> Result<Self, LoadError> {
        let cols = Columns::locate(table)?;
        let records = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| cols.record(&table.headers, row, i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Validate titles and collect tags in first-seen order.
    pub fn from_records(records: Vec<Record>) -> Result<Self, LoadError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            if r.title.trim().is_empty() {
                return Err(LoadError::EmptyTitle { row: i + 1 });
            }
            if !seen.insert(r.title.as_str()) {
                return Err(LoadError::DuplicateTitle { title: r.title.clone(), row: i + 1 });
            }
        }

        let mut tags: Vec<String> = Vec::new();
        let mut tag_set: HashSet<&str> = HashSet::new();
        for t in records.iter().flat_map(|r| r.tags.iter()) {
            if tag_set.insert(t.as_str()) {
                tags.push(t.clone());
            }
        }

        Ok(Self { records, tags, reference: None })
    }

    #[inline] pub fn records(&self) -> &[Record] { &self.records }
    #[inline] pub fn tags(&self) -> &[String] { &self.tags }
    #[inline] pub fn len(&self) -> usize { self.records.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Point the current `distance_km` values were computed from.
    #[inline] pub fn reference(&self) -> Option<GeoPoint> { self.reference }

    /// Recompute every record's distance from `from`.
    ///
    /// All-or-nothing: on the first unparsable coordinate nothing is written.
    pub fn compute_distances(&mut self, from: GeoPoint) -> Result<(), CoordinateParseError> {
        let distances = self
            .records
            .iter()
            .map(|r| r.point().map(|p| from.distance_km(&p)))
            .collect::<Result<Vec<f64>, _>>()?;

        for (r, d) in self.records.iter_mut().zip(distances) {
            r.distance_km = Some(d);
        }
        self.reference = Some(from);
        logd!("Dataset: distances from ({:.5}, {:.5}) for {} bars", from.lat, from.lon, self.len());
        Ok(())
    }
}

/// Column positions of the fields we type.
struct Columns {
    title: usize,
    coordinates: usize,
    rating: Option<usize>,
    reviews: Option<usize>,
    price: Option<usize>,
    category: Option<usize>,
    types: Option<usize>,
    address: Option<usize>,
    open_state: Option<usize>,
    hours: Option<usize>,
    operating_hours: Option<usize>,
    phone: Option<usize>,
    website: Option<usize>,
    service_options: Option<usize>,
}

const KNOWN: &[&str] = &[
    "title", "gps_coordinates", "rating", "reviews", "price", "type", "types", "address",
    "open_state", "hours", "operating_hours", "phone", "website", "service_options",
];

impl Columns {
    fn locate(t: &DataSet) -> Result<Self, LoadError> {
        Ok(Self {
            title: t.column("title").ok_or(LoadError::MissingColumn("title"))?,
            coordinates: t
                .column("gps_coordinates")
                .ok_or(LoadError::MissingColumn("gps_coordinates"))?,
            rating: t.column("rating"),
            reviews: t.column("reviews"),
            price: t.column("price"),
            category: t.column("type"),
            types: t.column("types"),
            address: t.column("address"),
            open_state: t.column("open_state"),
            hours: t.column("hours"),
            operating_hours: t.column("operating_hours"),
            phone: t.column("phone"),
            website: t.column("website"),
            service_options: t.column("service_options"),
        })
    }

    fn record(&self, headers: &[String], row: &[String], line: usize) -> Result<Record, LoadError> {
        let text = |ix: Option<usize>| -> Option<String> {
            ix.and_then(|i| row.get(i))
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let category = text(self.category);
        let tags = category.as_deref().map(split_tags).unwrap_or_default();

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !KNOWN.contains(&h.as_str()))
            .filter_map(|(i, h)| {
                row.get(i)
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (h.clone(), v.clone()))
            })
            .collect();

        Ok(Record {
            title: text(Some(self.title)).unwrap_or_default(),
            coordinates: text(Some(self.coordinates)).unwrap_or_default(),
            rating: parse_num(text(self.rating), line, "rating", |s| {
                s.parse::<f64>().ok().filter(|v| v.is_finite())
            })?,
            reviews: parse_num(text(self.reviews), line, "reviews", parse_count)?,
            price: text(self.price),
            category,
            tags,
            types: text(self.types),
            address: text(self.address),
            open_state: text(self.open_state),
            hours: text(self.hours),
            operating_hours: text(self.operating_hours),
            phone: text(self.phone),
            website: text(self.website),
            service_options: text(self.service_options),
            extra,
            distance_km: None,
        })
    }
}

fn parse_num<T>(
    cell: Option<String>,
    row: usize,
    column: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, LoadError> {
    match cell {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("nan") => Ok(None),
        Some(s) => parse(&s)
            .map(Some)
            .ok_or(LoadError::InvalidNumber { row, column, value: s }),
    }
}

/// Review counts sometimes come out of the scraper as "123.0".
fn parse_count(s: &str) -> Option<u64> {
    if let Ok(v) = s.parse::<u64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0).then_some(f as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataSet {
        DataSet::new(
            headers.iter().map(|s| s!(*s)).collect(),
            rows.iter().map(|r| r.iter().map(|s| s!(*s)).collect()).collect(),
        )
    }

    #[test]
    fn maps_columns_and_extras() {
        let t = table(
            &["title", "gps_coordinates", "rating", "reviews", "type", "website", "place_id"],
            &[&["Bar A", "52.0, 4.0", "4.5", "120.0", "Pub, Cocktail bar", "", "xyz"]],
        );
        let ds = Dataset::from_table(&t).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.rating, Some(4.5));
        assert_eq!(r.reviews, Some(120));
        assert_eq!(r.website, None);
        assert_eq!(r.extra, vec![(s!("place_id"), s!("xyz"))]);
        assert_eq!(ds.tags(), &strings!["Pub", "Cocktail bar"]);
    }

    #[test]
    fn missing_required_column() {
        let t = table(&["title", "rating"], &[&["A", "4"]]);
        assert!(matches!(
            Dataset::from_table(&t),
            Err(LoadError::MissingColumn("gps_coordinates"))
        ));
    }

    #[test]
    fn bad_number_is_a_load_error() {
        let t = table(&["title", "gps_coordinates", "rating"], &[&["A", "1,1", "great"]]);
        assert!(matches!(
            Dataset::from_table(&t),
            Err(LoadError::InvalidNumber { row: 1, column: "rating", .. })
        ));
    }
}
