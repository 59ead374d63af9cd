// src/scrape/ingest.rs
use std::{env, fs, path::{Path, PathBuf}};

use serde_json::Value;

use crate::config::consts::{API_KEY_ENV, API_KEY_FILE, PAGE_SIZE};
use crate::config::options::SearchOptions;
use crate::error::ScrapeError;
use crate::geocode::{self, Geocoder};
use crate::progress::Progress;
use crate::store::{self, DataSet};

use super::params::SearchParams;
use super::search::{PageOutcome, SearchProvider, classify};

/// Columns carried into the table, in output order.
pub const KEYS_TO_KEEP: &[&str] = &[
    "title", "gps_coordinates", "rating", "reviews", "price", "type", "types", "address",
    "open_state", "hours", "operating_hours", "phone", "website", "service_options",
];

const CAFES_PREFIX: &str = "cafes_";
const CAFES_CSV: &str = "cafes.csv";

#[derive(Clone, Debug)]
pub struct ScrapeSummary {
    pub dir: PathBuf,
    pub pages: usize,
    pub bars: usize,
    pub csv_path: PathBuf,
}

/// `SERPAPI_KEY` wins over the key file.
pub fn load_api_key(file: &Path) -> Result<String, ScrapeError> {
    if let Ok(k) = env::var(API_KEY_ENV) {
        let k = k.trim();
        if !k.is_empty() { return Ok(s!(k)); }
    }
    let missing = || ScrapeError::MissingApiKey { env: API_KEY_ENV, file: API_KEY_FILE };
    let text = fs::read_to_string(file).map_err(|_| missing())?;
    let key = text.trim();
    if key.is_empty() { return Err(missing()); }
    Ok(s!(key))
}

/// Geocode the city, fetch pages until the cap or the first error page,
/// then merge every saved page into `<dir>/cafes.csv`.
///
/// Pages already written stay on disk when a later page fails.
pub fn run(
    opts: &SearchOptions,
    api_key: &str,
    geocoder: &dyn Geocoder,
    provider: &dyn SearchProvider,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, ScrapeError> {
    let center = geocode::resolve(geocoder, &opts.city)?;
    let mut params = SearchParams::new(opts, center, api_key);

    let dir = opts.out_root.join(params.fingerprint());
    store::ensure_directory(&dir).map_err(|source| io_err(&dir, source))?;
    dump_json(&dir.join("search_params.json"), &serde_json::to_value(&params)?)?;

    let starts: Vec<usize> = (0..opts.num_results).step_by(PAGE_SIZE).collect();
    logf!("Scrape: '{}' near {} → {} (up to {} pages)", opts.query, params.ll, dir.display(), starts.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(starts.len());
    }

    let mut pages = 0usize;
    for start in starts {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Getting results {} to {}", start, start + PAGE_SIZE));
        }
        params.start = start.to_string();
        let page = provider.search(&params)?;
        dump_json(&dir.join(format!("all_results_{start:02}.json")), &page)?;

        match classify(&page) {
            PageOutcome::Results(items) => {
                dump_json(&dir.join(format!("{CAFES_PREFIX}{start:02}.json")), &Value::Array(items.clone()))?;
                pages += 1;
                logd!("Scrape: page {} → {} results", start, items.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.page_done(start, items.len());
                }
            }
            PageOutcome::Error(reason) => {
                logf!("Scrape: page {} stopped: {}", start, reason);
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(start, &reason);
                }
                break;
            }
        }
    }

    let cafes = collect_pages(&dir)?;
    let table = cafes_to_table(&cafes);
    let csv_path = dir.join(CAFES_CSV);
    store::save_table(&csv_path, &table, ',').map_err(|source| io_err(&csv_path, source))?;
    logf!("Scrape: wrote {} ({} bars)", csv_path.display(), table.row_count());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(ScrapeSummary { dir, pages, bars: table.row_count(), csv_path })
}

/// Every `cafes_<start>.json` in `dir`, concatenated in page order.
pub fn collect_pages(dir: &Path) -> Result<Vec<Value>, ScrapeError> {
    let mut files: Vec<(usize, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| io_err(dir, source))? {
        let path = entry.map_err(|source| io_err(dir, source))?.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else { continue };
        let Some(num) = name
            .strip_prefix(CAFES_PREFIX)
            .and_then(|rest| rest.strip_suffix(".json"))
            .and_then(|n| n.parse::<usize>().ok())
        else {
            continue;
        };
        files.push((num, path));
    }
    files.sort_by_key(|(n, _)| *n);

    let mut cafes = Vec::new();
    for (_, path) in files {
        let text = fs::read_to_string(&path).map_err(|source| io_err(&path, source))?;
        match serde_json::from_str::<Value>(&text)? {
            Value::Array(items) => cafes.extend(items),
            other => cafes.push(other),
        }
    }
    Ok(cafes)
}

/// Keep `KEYS_TO_KEEP` columns that occur in at least one entry.
/// Strings are written as-is, other JSON values compactly.
pub fn cafes_to_table(cafes: &[Value]) -> DataSet {
    let headers: Vec<&str> = KEYS_TO_KEEP
        .iter()
        .copied()
        .filter(|k| cafes.iter().any(|c| c.get(*k).is_some()))
        .collect();

    let rows = cafes
        .iter()
        .map(|c| headers.iter().map(|k| cell(c.get(*k))).collect())
        .collect();

    DataSet::new(headers.into_iter().map(String::from).collect(), rows)
}

fn cell(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => s!(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn dump_json(path: &Path, value: &Value) -> Result<(), ScrapeError> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).map_err(|source| io_err(path, source))
}

fn io_err(path: &Path, source: std::io::Error) -> ScrapeError {
    ScrapeError::Io { path: path.to_path_buf(), source }
}
