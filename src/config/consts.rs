// src/config/consts.rs

// Dataset
pub const DEFAULT_DATA_FILE: &str = "data/cafes.csv";
pub const DEFAULT_ADDRESS: &str = "Klein Delfgauw 53, Delft";

// Geocoding
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const USER_AGENT: &str = "barselector";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Search ingestion
pub const SERPAPI_URL: &str = "https://serpapi.com/search.json";
pub const SEARCH_ENGINE: &str = "google_maps";
pub const DEFAULT_CITY: &str = "Delft";
pub const DEFAULT_QUERY: &str = "bars in delft";
pub const DEFAULT_GOOGLE_DOMAIN: &str = "google.nl";
pub const DEFAULT_ZOOM: u32 = 13;
pub const PAGE_SIZE: usize = 20;
pub const DEFAULT_NUM_RESULTS: usize = 200;
pub const DEFAULT_SCRAPE_DIR: &str = "data";
pub const API_KEY_FILE: &str = "api_key.txt";
pub const API_KEY_ENV: &str = "SERPAPI_KEY";

// GUI
pub const SLIDER_MAX_KM: f64 = 20.0;
pub const TAG_GRID_COLS: usize = 5;
pub const SETTINGS_FILE: &str = "barselector.cfg";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
