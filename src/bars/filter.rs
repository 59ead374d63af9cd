// src/bars/filter.rs
//
// Distance + tag filtering over a Dataset. Output keeps dataset order.
//
// - Distance: keep `distance_km < threshold`. Records without a computed
//   distance are never excluded by this rule.
// - Tags: keep records carrying at least one of the required tags, compared
//   against the trimmed tokens of the `type` cell (so "Bar" does not match
//   "Wine Bar").
// - Both rules must pass.

use super::dataset::Dataset;
use super::record::Record;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub distance_threshold: Option<f64>,
    pub required_tags: Vec<String>,
}

impl FilterState {
    pub fn apply<'a>(&self, ds: &'a Dataset) -> Vec<&'a Record> {
        filter(ds, self.distance_threshold, &self.required_tags)
    }
}

pub fn filter<'a>(ds: &'a Dataset, threshold: Option<f64>, required_tags: &[String]) -> Vec<&'a Record> {
    ds.records()
        .iter()
        .filter(|r| passes_distance(r, threshold) && passes_tags(r, required_tags))
        .collect()
}

/// Positions of the kept records, for views that index back into the dataset.
pub fn filter_indices(ds: &Dataset, threshold: Option<f64>, required_tags: &[String]) -> Vec<usize> {
    ds.records()
        .iter()
        .enumerate()
        .filter(|(_, r)| passes_distance(r, threshold) && passes_tags(r, required_tags))
        .map(|(i, _)| i)
        .collect()
}

#[inline]
pub fn passes_distance(r: &Record, threshold: Option<f64>) -> bool {
    match (threshold, r.distance_km) {
        (Some(max), Some(d)) => d < max,
        _ => true,
    }
}

#[inline]
pub fn passes_tags(r: &Record, required: &[String]) -> bool {
    required.is_empty() || required.iter().any(|t| r.has_tag(t))
}
