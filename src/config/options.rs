// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub data_path: PathBuf,
    pub geocoder: GeocoderOptions,
    pub search: SearchOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            geocoder: GeocoderOptions::default(),
            search: SearchOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeocoderOptions {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GeocoderOptions {
    fn default() -> Self {
        Self {
            base_url: s!(NOMINATIM_URL),
            user_agent: s!(USER_AGENT),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub city: String,
    pub query: String,
    pub google_domain: String,
    pub zoom: u32,
    pub num_results: usize,
    pub out_root: PathBuf,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            city: s!(DEFAULT_CITY),
            query: s!(DEFAULT_QUERY),
            google_domain: s!(DEFAULT_GOOGLE_DOMAIN),
            zoom: DEFAULT_ZOOM,
            num_results: DEFAULT_NUM_RESULTS,
            out_root: PathBuf::from(DEFAULT_SCRAPE_DIR),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Csv,
    #[default]
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}
