// tests/scrape_job.rs
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use barselector::bars::Dataset;
use barselector::config::options::SearchOptions;
use barselector::error::ScrapeError;
use barselector::geocode::StaticGeocoder;
use barselector::progress::Progress;
use barselector::scrape::{self, SearchParams, SearchProvider};
use barselector::strings;
use serde_json::{Value, json};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("barselector_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Serves canned pages in order and records the `start` of every call.
struct Canned {
    pages: Vec<Value>,
    starts: RefCell<Vec<String>>,
}

impl Canned {
    fn new(pages: Vec<Value>) -> Self {
        Self { pages, starts: RefCell::new(Vec::new()) }
    }
}

impl SearchProvider for Canned {
    fn search(&self, params: &SearchParams) -> Result<Value, ScrapeError> {
        let n = self.starts.borrow().len();
        self.starts.borrow_mut().push(params.start.clone());
        Ok(self.pages.get(n).cloned().unwrap_or_else(|| json!({ "error": "no more pages" })))
    }
}

#[derive(Default)]
struct Recorder {
    begun: Option<usize>,
    done: Vec<(usize, usize)>,
    failed: Vec<usize>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, pages: usize) { self.begun = Some(pages); }
    fn page_done(&mut self, start: usize, results: usize) { self.done.push((start, results)); }
    fn page_failed(&mut self, start: usize, _reason: &str) { self.failed.push(start); }
    fn finish(&mut self) { self.finished = true; }
}

fn opts(out_root: PathBuf, num_results: usize) -> SearchOptions {
    SearchOptions { num_results, out_root, ..SearchOptions::default() }
}

fn delft() -> StaticGeocoder {
    StaticGeocoder::new().with("Delft", 52.0116, 4.3571)
}

#[test]
fn stops_at_first_error_page_and_writes_table() {
    let out = tmp_dir("stops");
    let provider = Canned::new(vec![
        json!({ "local_results": [
            { "title": "Oude Jan", "gps_coordinates": { "latitude": 52.012, "longitude": 4.356 },
              "rating": 4.4, "reviews": 812, "type": "Pub, Bar", "place_id": "abc" },
            { "title": "Spoorzicht", "gps_coordinates": { "latitude": 52.011, "longitude": 4.359 },
              "type": "Cafe", "website": "https://spoor.example" }
        ]}),
        json!({ "local_results": [
            { "title": "De Wijnkelder", "gps_coordinates": { "latitude": 52.0095, "longitude": 4.361 },
              "rating": 4.7, "type": "Wine Bar" }
        ]}),
        json!({ "error": "Google hasn't returned any results for this query." }),
        json!({ "local_results": [ { "title": "Never Fetched" } ] }),
    ]);
    let mut progress = Recorder::default();

    let summary = scrape::run(&opts(out.clone(), 200), "secret", &delft(), &provider, Some(&mut progress))
        .unwrap();

    // pagination: 0, 20, 40 then stop
    assert_eq!(*provider.starts.borrow(), strings!["0", "20", "40"]);
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.bars, 3);
    assert_eq!(progress.begun, Some(10));
    assert_eq!(progress.done, vec![(0, 2), (20, 1)]);
    assert_eq!(progress.failed, vec![40]);
    assert!(progress.finished);

    let dir = &summary.dir;
    assert!(dir.starts_with(&out));
    for f in ["search_params.json", "all_results_00.json", "all_results_20.json", "all_results_40.json",
              "cafes_00.json", "cafes_20.json", "cafes.csv"] {
        assert!(dir.join(f).is_file(), "missing {f}");
    }
    assert!(!dir.join("cafes_40.json").exists());

    // the key never reaches disk
    let params = fs::read_to_string(dir.join("search_params.json")).unwrap();
    assert!(!params.contains("secret"));
    assert!(params.contains("@52.011600,4.357100,13z"));

    // header keeps only known keys that occur, in canonical order
    let csv = fs::read_to_string(&summary.csv_path).unwrap();
    let header = csv.lines().next().unwrap();
    assert_eq!(header, "title,gps_coordinates,rating,reviews,type,website");

    // and the engine can read it back
    let ds = Dataset::load(&summary.csv_path).unwrap();
    let titles: Vec<&str> = ds.records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Oude Jan", "Spoorzicht", "De Wijnkelder"]);
    assert!(ds.records().iter().all(|r| r.point().is_ok()));
    assert_eq!(ds.records()[0].reviews, Some(812));
}

#[test]
fn same_search_lands_in_same_directory() {
    let out = tmp_dir("fingerprint");
    let page = || json!({ "local_results": [ { "title": "A", "gps_coordinates": "52.0, 4.0" } ] });

    let a = scrape::run(&opts(out.clone(), 20), "k1", &delft(), &Canned::new(vec![page()]), None).unwrap();
    let b = scrape::run(&opts(out.clone(), 20), "k2", &delft(), &Canned::new(vec![page()]), None).unwrap();
    assert_eq!(a.dir, b.dir);

    let mut other = opts(out, 20);
    other.query = String::from("cafes in delft");
    let c = scrape::run(&other, "k1", &delft(), &Canned::new(vec![page()]), None).unwrap();
    assert_ne!(a.dir, c.dir);
}

#[test]
fn unknown_city_fails_before_any_request() {
    let out = tmp_dir("no_city");
    let mut o = opts(out, 40);
    o.city = String::from("Atlantis");
    let provider = Canned::new(vec![]);
    let res = scrape::run(&o, "k", &delft(), &provider, None);
    assert!(matches!(res, Err(ScrapeError::Geocode(_))));
    assert!(provider.starts.borrow().is_empty());
}

#[test]
fn first_page_error_gives_empty_table() {
    let out = tmp_dir("first_fails");
    let provider = Canned::new(vec![json!({ "error": "Invalid API key." })]);
    let summary = scrape::run(&opts(out, 200), "bad", &delft(), &provider, None).unwrap();
    assert_eq!(summary.pages, 0);
    assert_eq!(summary.bars, 0);
    assert!(summary.csv_path.is_file());
}

#[test]
fn api_key_file_is_trimmed() {
    let dir = tmp_dir("key");
    let path = dir.join("api_key.txt");
    fs::write(&path, "  abc123 \n").unwrap();
    // env var takes precedence when set; only check the file path when it isn't
    if std::env::var("SERPAPI_KEY").is_err() {
        assert_eq!(scrape::load_api_key(&path).unwrap(), "abc123");
        assert!(matches!(
            scrape::load_api_key(&dir.join("missing.txt")),
            Err(ScrapeError::MissingApiKey { .. })
        ));
    }
}
