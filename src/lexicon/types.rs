//! Lexicon Data Types
//!
//! The Strong's entry shape matches the converted OpenScriptures dataset, so
//! the JSON wire format keeps its snake_case field names.

use serde::{Deserialize, Serialize};

/// One Strong's lexicon entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Strong's identifier, e.g. "G25" or "H3068".
    pub strongs_number: String,
    #[serde(default)]
    pub original_word: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub language: String,
}

/// The on-disk dataset layout: one array per language.
#[derive(Debug, Default, Deserialize)]
pub struct LexiconData {
    #[serde(default)]
    pub greek: Vec<LexiconEntry>,
    #[serde(default)]
    pub hebrew: Vec<LexiconEntry>,
}

/// One page of query results plus pagination bookkeeping.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconPage {
    pub entries: Vec<LexiconEntry>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}
