// src/scrape/search.rs
use std::time::Duration;

use serde_json::Value;

use crate::config::consts::{HTTP_TIMEOUT_SECS, SERPAPI_URL, USER_AGENT};
use crate::error::ScrapeError;

use super::params::SearchParams;

/// One page of a paginated places search, returned as the raw JSON document.
pub trait SearchProvider {
    fn search(&self, params: &SearchParams) -> Result<Value, ScrapeError>;
}

/// What a raw page means for pagination.
#[derive(Clone, Debug, PartialEq)]
pub enum PageOutcome {
    Results(Vec<Value>),
    Error(String),
}

/// A page either carries `local_results` or it ends the run.
pub fn classify(page: &Value) -> PageOutcome {
    match page.get("local_results").and_then(Value::as_array) {
        Some(items) => PageOutcome::Results(items.clone()),
        None => {
            let reason = page
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("no local_results in response");
            PageOutcome::Error(s!(reason))
        }
    }
}

pub struct SerpApiClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl SerpApiClient {
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_url(SERPAPI_URL)
    }

    pub fn with_url(url: &str) -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS * 4))
            .build()?;
        Ok(Self { client, url: s!(url) })
    }
}

impl SearchProvider for SerpApiClient {
    fn search(&self, params: &SearchParams) -> Result<Value, ScrapeError> {
        logd!("Search: GET {} start={}", self.url, params.start);
        let resp = self
            .client
            .get(&self.url)
            .query(&params.pairs())
            .query(&[("api_key", params.api_key.as_str())])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        // Error payloads are JSON too; let the caller see them as a page.
        match serde_json::from_str::<Value>(&body) {
            Ok(v) => Ok(v),
            Err(_) if !status.is_success() => Err(ScrapeError::Api {
                status: status.as_u16(),
                message: body,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
