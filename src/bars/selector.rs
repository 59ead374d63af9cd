// src/bars/selector.rs
//
// BarSelector: the one object a frontend talks to. Owns the dataset, the
// geocoder and the current filter state; every call runs to completion.

use std::sync::Arc;

use rand::Rng;

use crate::config::options::AppOptions;
use crate::error::{CoordinateParseError, EmptyResultError, Error, GeocodeError, NotFoundError};
use crate::geocode::{self, Geocoder, NominatimGeocoder};

use super::accessor::{get_by_title, get_random};
use super::dataset::Dataset;
use super::distance::GeoPoint;
use super::filter::{FilterState, filter_indices};
use super::record::Record;

pub struct BarSelector {
    dataset: Dataset,
    geocoder: Arc<dyn Geocoder>,
    filter: FilterState,
}

impl BarSelector {
    pub fn new(dataset: Dataset, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { dataset, geocoder, filter: FilterState::default() }
    }

    /// Load the configured dataset and wire up Nominatim.
    pub fn from_options(opts: &AppOptions) -> Result<Self, Error> {
        let dataset = Dataset::load(&opts.data_path)?;
        let geocoder = NominatimGeocoder::new(&opts.geocoder)?;
        Ok(Self::new(dataset, Arc::new(geocoder)))
    }

    #[inline] pub fn dataset(&self) -> &Dataset { &self.dataset }
    #[inline] pub fn tags(&self) -> &[String] { self.dataset.tags() }
    #[inline] pub fn filter_state(&self) -> &FilterState { &self.filter }
    #[inline] pub fn reference(&self) -> Option<GeoPoint> { self.dataset.reference() }

    /// Shared handle for running lookups off the calling thread.
    pub fn geocoder(&self) -> Arc<dyn Geocoder> {
        Arc::clone(&self.geocoder)
    }

    /* ---------- reference point ---------- */

    pub fn resolve_address(&self, text: &str) -> Result<GeoPoint, GeocodeError> {
        geocode::resolve(self.geocoder.as_ref(), text)
    }

    /// Geocode `text` and recompute distances from it.
    pub fn set_reference_address(&mut self, text: &str) -> Result<GeoPoint, Error> {
        let point = self.resolve_address(text)?;
        self.set_reference_point(point)?;
        Ok(point)
    }

    pub fn set_reference_point(&mut self, point: GeoPoint) -> Result<(), CoordinateParseError> {
        self.dataset.compute_distances(point).inspect_err(|e| loge!("Distances: {}", e))
    }

    /* ---------- filters ---------- */

    pub fn set_distance_threshold(&mut self, km: Option<f64>) {
        logd!("Filter: distance → {:?}", km);
        self.filter.distance_threshold = km;
    }

    pub fn set_required_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.required_tags = tags.into_iter().map(Into::into).collect();
        logd!("Filter: tags → {:?}", self.filter.required_tags);
    }

    pub fn filtered(&self) -> Vec<&Record> {
        self.filter.apply(&self.dataset)
    }

    pub fn filtered_indices(&self) -> Vec<usize> {
        filter_indices(&self.dataset, self.filter.distance_threshold, &self.filter.required_tags)
    }

    /* ---------- lookups ---------- */

    pub fn entry(&self, title: &str) -> Result<&Record, NotFoundError> {
        get_by_title(&self.dataset, title)
    }

    pub fn website(&self, title: &str) -> Result<Option<&str>, NotFoundError> {
        Ok(self.entry(title)?.website.as_deref())
    }

    /// Uniform pick from the current filtered view, returned as the full record.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Record, EmptyResultError> {
        let view = self.filtered();
        let picked: &Record = *get_random(&view, rng)?;
        logf!("Pick: '{}' out of {}", picked.title, view.len());
        Ok(picked)
    }
}
