//! Lexicon Store
//!
//! Loads the converted Strong's dataset once and answers queries with plain
//! array scans. The dataset is a few thousand entries, so linear filtering is
//! plenty fast and keeps the lookup logic obvious.

use std::path::Path;

use crate::error::AppError;
use crate::lexicon::types::{LexiconData, LexiconEntry, LexiconPage};

pub struct LexiconStore {
    greek: Vec<LexiconEntry>,
    hebrew: Vec<LexiconEntry>,
}

/// Filters accepted by `LexiconStore::query`.
#[derive(Debug, Default)]
pub struct LexiconQuery {
    pub search: Option<String>,
    pub language: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl LexiconStore {
    /// Loads the dataset from disk. A missing file yields an empty lexicon
    /// with a warning, so the Bible endpoints keep working without the
    /// dataset installed.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "lexicon dataset not available: {}",
                    e
                );
                return Ok(Self::from_data(LexiconData::default()));
            }
        };

        let data: LexiconData = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::CorruptData(format!("invalid lexicon JSON: {}", e)))?;

        tracing::info!(
            greek = data.greek.len(),
            hebrew = data.hebrew.len(),
            "loaded lexicon dataset"
        );

        Ok(Self::from_data(data))
    }

    pub fn from_data(data: LexiconData) -> Self {
        Self {
            greek: data.greek,
            hebrew: data.hebrew,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.greek.len() + self.hebrew.len()
    }

    /// Looks up one entry by Strong's number ("G25", "h3068").
    pub fn get(&self, code: &str) -> Option<&LexiconEntry> {
        self.greek
            .iter()
            .chain(self.hebrew.iter())
            .find(|entry| entry.strongs_number.eq_ignore_ascii_case(code))
    }

    /// Runs a filtered, paginated query. Greek entries come before Hebrew
    /// when no language filter is given.
    pub fn query(&self, params: &LexiconQuery) -> Result<LexiconPage, AppError> {
        let page = params.page.max(1);
        let limit = params.limit;
        if limit == 0 {
            return Err(AppError::InvalidArgument("limit must be positive".into()));
        }

        let mut candidates: Vec<&LexiconEntry> = Vec::new();
        let language = params.language.as_deref();
        if language.is_none() || language == Some("greek") {
            candidates.extend(self.greek.iter());
        }
        if language.is_none() || language == Some("hebrew") {
            candidates.extend(self.hebrew.iter());
        }

        let filtered: Vec<&LexiconEntry> = match params.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let needle = term.to_lowercase();
                candidates
                    .into_iter()
                    .filter(|entry| entry_matches(entry, &needle))
                    .collect()
            }
            _ => candidates,
        };

        let total = filtered.len();
        let start = (page - 1) * limit;
        let entries: Vec<LexiconEntry> = filtered
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        Ok(LexiconPage {
            entries,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        })
    }
}

fn entry_matches(entry: &LexiconEntry, needle: &str) -> bool {
    entry.original_word.to_lowercase().contains(needle)
        || entry.transliteration.to_lowercase().contains(needle)
        || entry.definition.to_lowercase().contains(needle)
}
