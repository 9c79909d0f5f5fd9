//! Bible API Types
//!
//! Data Transfer Objects (DTOs) returned by the bible endpoints. Field names
//! follow the wire format the frontend already consumes (camelCase for
//! multi-word keys).

use serde::Serialize;

use crate::bible::catalog::CatalogEntry;
use crate::bible::text::VerseRef;

/// One catalog entry as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

impl VersionInfo {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            abbreviation: entry.abbreviation.to_string(),
        }
    }
}

/// One chapter with normalized verses.
#[derive(Debug, Serialize)]
pub struct ChapterView {
    pub version: String,
    pub book: String,
    pub chapter: u32,
    pub verses: Vec<VerseRef>,
}

/// An inclusive verse range extracted from a chapter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageView {
    pub version: String,
    pub book: String,
    pub chapter: u32,
    pub start_verse: u32,
    pub end_verse: u32,
    pub verses: Vec<VerseRef>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterCountResponse {
    pub chapter_count: usize,
}

/// A half-open byte range `[start, end)` into the lowercased verse text
/// marking one query occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
}

/// One matching verse from a search scan.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub highlights: Vec<Highlight>,
}
