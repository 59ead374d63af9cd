// src/scrape/mod.rs
//
// One-shot ingestion job: search a places API page by page and turn the
// results into a table the dataset loader can read. Not used by the engine.

mod ingest;
mod params;
mod search;

pub use ingest::{KEYS_TO_KEEP, ScrapeSummary, cafes_to_table, collect_pages, load_api_key, run};
pub use params::{SearchParams, ll_string};
pub use search::{PageOutcome, SearchProvider, SerpApiClient, classify};
