//! HTTP clients for the dictionary service
//!
//! [`DictionaryClient`] is used by the interactive session, where lookups run
//! as tokio tasks. [`BlockingDictionaryClient`] serves the one-shot CLI path,
//! which never starts a runtime. Both build one `reqwest` client up front and
//! reuse it; neither retries or caches.

use super::{interpret_response, normalize, LookupError, WordEntry};
use crate::config::ApiConfig;
use anyhow::{bail, Context, Result};
use reqwest::Url;

/// Async dictionary client
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http: reqwest::Client,
    base: Url,
}

impl DictionaryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: parse_base_url(&config.base_url)?,
        })
    }

    /// Fetch all entries for `word`
    pub async fn lookup(&self, word: &str) -> Result<Vec<WordEntry>, LookupError> {
        let clean = normalize(word).ok_or(LookupError::EmptyInput)?;
        let url = entry_url(&self.base, &clean);
        tracing::debug!(%url, "Looking up definition");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(LookupError::Network)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(LookupError::Read)?;

        let result = interpret_response(word, status, &body);
        log_outcome(&clean, status, &result);
        result
    }
}

/// Blocking dictionary client for the one-shot path
#[derive(Debug, Clone)]
pub struct BlockingDictionaryClient {
    http: reqwest::blocking::Client,
    base: Url,
}

impl BlockingDictionaryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: parse_base_url(&config.base_url)?,
        })
    }

    /// Fetch all entries for `word`, blocking the calling thread
    pub fn lookup(&self, word: &str) -> Result<Vec<WordEntry>, LookupError> {
        let clean = normalize(word).ok_or(LookupError::EmptyInput)?;
        let url = entry_url(&self.base, &clean);
        tracing::debug!(%url, "Looking up definition");

        let response = self.http.get(url).send().map_err(LookupError::Network)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(LookupError::Read)?;

        let result = interpret_response(word, status, &body);
        log_outcome(&clean, status, &result);
        result
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid dictionary URL: {raw}"))?;
    if url.cannot_be_a_base() {
        bail!("Dictionary URL cannot take a path: {raw}");
    }
    Ok(url)
}

/// Append the word as a single percent-encoded path segment
fn entry_url(base: &Url, word: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(word);
    }
    url
}

fn log_outcome(word: &str, status: u16, result: &Result<Vec<WordEntry>, LookupError>) {
    match result {
        Ok(entries) => {
            tracing::debug!(word, status, entries = entries.len(), "Lookup succeeded")
        }
        Err(e) => tracing::debug!(word, status, error = %e, "Lookup failed"),
    }
}
