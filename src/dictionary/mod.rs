//! Dictionary data model and response classification
//!
//! The remote service answers `GET /{word}` with a JSON array of entries.
//! Everything here is transport-agnostic: the async and blocking clients in
//! [`client`] both hand the raw status and body to [`interpret_response`].

pub mod client;

pub use client::{BlockingDictionaryClient, DictionaryClient};

use serde::Deserialize;
use thiserror::Error;

/// One dictionary record for a word
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
    pub source_urls: Vec<String>,
}

impl WordEntry {
    /// Transcription to show next to the headword
    ///
    /// Prefers the top-level `phonetic`; the service often leaves it out and
    /// only fills `phonetics[].text`, so the first non-empty one is used then.
    pub fn display_phonetic(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .find(|t| !t.is_empty())
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

/// Definitions grouped under one part of speech
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
}

/// Everything that can go wrong during a lookup
///
/// Display strings are the user-facing messages shown in the TUI status
/// area and after `Error:` in one-shot mode.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("please enter a word to search")]
    EmptyInput,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("definition for '{word}' not found")]
    NotFound { word: String },

    #[error("API returned status code {code}")]
    ApiStatus { code: u16 },

    #[error("failed to parse API response: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("no data found for '{word}'")]
    NoData { word: String },
}

/// Trim and lower-case a query; `None` when nothing is left to look up
pub fn normalize(word: &str) -> Option<String> {
    let clean = word.trim().to_lowercase();
    (!clean.is_empty()).then_some(clean)
}

/// Map a received response onto entries or a [`LookupError`]
///
/// `word` is the query as the caller typed it; it is echoed back in
/// not-found and no-data errors. Checks run in a fixed order: 404 first,
/// then any other non-200 status, then JSON shape, then emptiness.
pub fn interpret_response(
    word: &str,
    status: u16,
    body: &[u8],
) -> Result<Vec<WordEntry>, LookupError> {
    if status == 404 {
        return Err(LookupError::NotFound {
            word: word.to_string(),
        });
    }

    if status != 200 {
        return Err(LookupError::ApiStatus { code: status });
    }

    let entries: Vec<WordEntry> = serde_json::from_slice(body).map_err(LookupError::Parse)?;

    if entries.is_empty() {
        return Err(LookupError::NoData {
            word: word.to_string(),
        });
    }

    Ok(entries)
}
