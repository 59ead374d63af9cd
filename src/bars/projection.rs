// src/bars/projection.rs
//
// The read-only display table: a fixed subset of columns, one row per kept
// record. The full record stays reachable through `BarSelector::entry`.

use super::record::Record;

pub const DISPLAY_HEADERS: &[&str] = &["title", "rating", "reviews", "price", "type"];
pub const DISTANCE_HEADER: &str = "distance";

/// Column indices that hold numbers (right/center aligned, numeric sort).
pub fn numeric_columns(with_distance: bool) -> Vec<usize> {
    let mut cols = vec![1, 2];
    if with_distance { cols.push(DISPLAY_HEADERS.len()); }
    cols
}

pub fn headers(with_distance: bool) -> Vec<String> {
    let mut h: Vec<String> = DISPLAY_HEADERS.iter().map(|s| s!(*s)).collect();
    if with_distance { h.push(s!(DISTANCE_HEADER)); }
    h
}

pub fn row(r: &Record, with_distance: bool) -> Vec<String> {
    let mut out = vec![
        r.title.clone(),
        r.rating.map(|v| format!("{v:.1}")).unwrap_or_default(),
        r.reviews.map(|v| v.to_string()).unwrap_or_default(),
        r.price.clone().unwrap_or_default(),
        r.category.clone().unwrap_or_default(),
    ];
    if with_distance {
        out.push(r.distance_km.map(|d| format!("{d:.2}")).unwrap_or_default());
    }
    out
}

/// Headers + rows for a filtered view.
pub fn table(records: &[&Record], with_distance: bool) -> (Vec<String>, Vec<Vec<String>>) {
    let rows = records.iter().map(|r| row(r, with_distance)).collect();
    (headers(with_distance), rows)
}
