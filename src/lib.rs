// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod bars;
pub mod config;
pub mod csv;
pub mod error;
pub mod geocode;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use bars::{BarSelector, Dataset, Record};
pub use error::{Error, Result};
