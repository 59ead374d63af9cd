// src/scrape/params.rs
use std::collections::BTreeMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::bars::GeoPoint;
use crate::config::consts::SEARCH_ENGINE;
use crate::config::options::SearchOptions;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub engine: String,
    pub q: String,
    pub ll: String,
    pub google_domain: String,
    pub num: String,
    pub start: String,
    #[serde(skip)]
    pub api_key: String,
}

impl SearchParams {
    pub fn new(opts: &SearchOptions, center: GeoPoint, api_key: &str) -> Self {
        Self {
            engine: s!(SEARCH_ENGINE),
            q: opts.query.clone(),
            ll: ll_string(center, opts.zoom),
            google_domain: opts.google_domain.clone(),
            num: s!("0"),
            start: s!("0"),
            api_key: s!(api_key),
        }
    }

    /// Query pairs without the key.
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("engine", self.engine.as_str()),
            ("q", self.q.as_str()),
            ("ll", self.ll.as_str()),
            ("google_domain", self.google_domain.as_str()),
            ("num", self.num.as_str()),
            ("start", self.start.as_str()),
        ]
    }

    /// SHA-256 hex over the key-sorted JSON of the query (API key excluded).
    /// Names the output directory, so the same search lands in the same place.
    pub fn fingerprint(&self) -> String {
        let sorted: BTreeMap<&str, &str> = self.pairs().into_iter().collect();
        let json = serde_json::to_string(&sorted).unwrap_or_default();
        hex::encode(Sha256::digest(json.as_bytes()))
    }
}

/// Map viewport string: `@52.011600,4.357100,13z`.
pub fn ll_string(p: GeoPoint, zoom: u32) -> String {
    format!("@{:.6},{:.6},{}z", p.lat, p.lon, zoom)
}
