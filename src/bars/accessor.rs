// src/bars/accessor.rs
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{EmptyResultError, NotFoundError};

use super::dataset::Dataset;
use super::record::Record;

/// Exact-title lookup.
pub fn get_by_title<'a>(ds: &'a Dataset, title: &str) -> Result<&'a Record, NotFoundError> {
    ds.records()
        .iter()
        .find(|r| r.title == title)
        .ok_or_else(|| NotFoundError(s!(title)))
}

/// Uniform pick. Pass a seeded `StdRng` for reproducible picks.
pub fn get_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Result<&'a T, EmptyResultError>
where
    R: Rng + ?Sized,
{
    items.choose(rng).ok_or(EmptyResultError)
}
