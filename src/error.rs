// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Dataset could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is empty (no header row)")]
    Empty,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("duplicate title '{title}' on row {row}")]
    DuplicateTitle { title: String, row: usize },

    #[error("row {row}: empty title")]
    EmptyTitle { row: usize },

    #[error("row {row}: invalid {column} value '{value}'")]
    InvalidNumber { row: usize, column: &'static str, value: String },
}

/// Address could not be resolved. Recoverable; the user may retry.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no location found for '{0}'")]
    NotFound(String),

    #[error("geocoding service unavailable: {0}")]
    Service(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Service(err.to_string())
    }
}

/// A stored coordinate could not be parsed. Data-integrity failure.
#[derive(Debug, Error)]
#[error("record '{title}': unparsable coordinates '{raw}'")]
pub struct CoordinateParseError {
    pub title: String,
    pub raw: String,
}

#[derive(Debug, Error)]
#[error("no record titled '{0}'")]
pub struct NotFoundError(pub String);

#[derive(Debug, Error)]
#[error("no records to pick from")]
pub struct EmptyResultError;

/// Search ingestion failures. A page that answers with an error payload is
/// not one of these; it ends pagination normally.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("missing API key (set {env} or create {file})")]
    MissingApiKey { env: &'static str, file: &'static str },

    #[error("network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Parse(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Coordinates(#[from] CoordinateParseError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    EmptyResult(#[from] EmptyResultError),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}
