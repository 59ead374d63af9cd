// src/bars/mod.rs
//
// The filtering engine: typed records, distance computation, filters and
// lookups. No I/O beyond the initial table read, no UI.

pub mod accessor;
pub mod dataset;
pub mod distance;
pub mod filter;
pub mod projection;
pub mod record;
pub mod selector;

pub use accessor::{get_by_title, get_random};
pub use dataset::Dataset;
pub use distance::{GeoPoint, haversine_km, parse_coordinates};
pub use filter::{FilterState, filter, filter_indices};
pub use record::Record;
pub use selector::BarSelector;
