// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Each action mutates App and leaves a status message behind.

mod copy;      // src/gui/actions/copy.rs
mod filters;   // src/gui/actions/filters.rs
mod geocode;   // src/gui/actions/geocode.rs
mod pick;      // src/gui/actions/pick.rs

pub use copy::copy;
pub use filters::{apply_filters, resort};
pub use geocode::{poll_geocode, start_geocode};
pub use pick::{pick_random, select};
