//! Translation Text Structure
//!
//! The decoded form of one translation's data file, plus the verse-numbering
//! rules. The on-disk format is a JSON object mapping book name to an object
//! mapping chapter number (as a string key) to an array of verse strings:
//!
//! ```json
//! { "Genesis": { "1": ["In the beginning...", "..."] } }
//! ```
//!
//! Books keep the file's order; chapters are held in numeric order. Verse
//! strings are kept raw and normalized into `(verse, text)` pairs on access,
//! because the two historical exporters disagree on how verse numbers are
//! recorded (see `VerseNumbering`).

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

/// How verse numbers are derived from a data file's verse strings.
///
/// Two exporter generations produced the data files this service reads, and
/// they encode verse numbers differently. The rule is declared per catalog
/// entry, never guessed from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseNumbering {
    /// Verse number is the array position + 1; the string is the verse text.
    Positional,
    /// Each string starts with a leading integer token ("16 For God so
    /// loved..."); the number is parsed off and the remainder is the text.
    /// Strings without a leading integer fall back to verse 1.
    Prefixed,
}

/// One normalized verse: number plus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRef {
    pub verse: u32,
    pub text: String,
}

#[derive(Debug)]
pub struct ChapterText {
    pub number: u32,
    verses: Vec<String>,
}

#[derive(Debug)]
pub struct BookText {
    pub name: String,
    pub chapters: Vec<ChapterText>,
}

/// A fully decoded translation. Immutable after parse; shared via `Arc` from
/// the store's cache.
#[derive(Debug)]
pub struct TranslationText {
    numbering: VerseNumbering,
    books: Vec<BookText>,
}

impl TranslationText {
    /// Parses decompressed JSON bytes into the translation structure.
    ///
    /// Fails with `CorruptData` on any shape violation: non-object roots,
    /// non-numeric chapter keys, or non-string verse entries.
    pub fn parse(bytes: &[u8], numbering: VerseNumbering) -> Result<Self, AppError> {
        let root: Value = serde_json::from_slice(bytes)
            .map_err(|e| AppError::CorruptData(format!("invalid translation JSON: {}", e)))?;

        let book_map = root
            .as_object()
            .ok_or_else(|| AppError::CorruptData("translation root is not an object".into()))?;

        let mut books = Vec::with_capacity(book_map.len());
        for (book_name, chapters_value) in book_map {
            let chapter_map = chapters_value.as_object().ok_or_else(|| {
                AppError::CorruptData(format!("book '{}' is not an object", book_name))
            })?;

            let mut chapters = Vec::with_capacity(chapter_map.len());
            for (chapter_key, verses_value) in chapter_map {
                let number: u32 = chapter_key.parse().map_err(|_| {
                    AppError::CorruptData(format!(
                        "book '{}' has non-numeric chapter key '{}'",
                        book_name, chapter_key
                    ))
                })?;

                let verse_values = verses_value.as_array().ok_or_else(|| {
                    AppError::CorruptData(format!(
                        "chapter {} {} is not an array",
                        book_name, chapter_key
                    ))
                })?;

                let mut verses = Vec::with_capacity(verse_values.len());
                for verse in verse_values {
                    let text = verse.as_str().ok_or_else(|| {
                        AppError::CorruptData(format!(
                            "non-string verse in {} {}",
                            book_name, chapter_key
                        ))
                    })?;
                    verses.push(text.to_string());
                }

                chapters.push(ChapterText { number, verses });
            }

            // Chapter keys arrive as strings in file order; scan order is numeric.
            chapters.sort_by_key(|chapter| chapter.number);

            books.push(BookText {
                name: book_name.clone(),
                chapters,
            });
        }

        Ok(Self { numbering, books })
    }

    pub fn numbering(&self) -> VerseNumbering {
        self.numbering
    }

    /// Books in file order.
    pub fn books(&self) -> &[BookText] {
        &self.books
    }

    pub fn book(&self, name: &str) -> Option<&BookText> {
        self.books.iter().find(|book| book.name == name)
    }
}

impl BookText {
    pub fn chapter(&self, number: u32) -> Option<&ChapterText> {
        self.chapters.iter().find(|chapter| chapter.number == number)
    }
}

impl ChapterText {
    /// Normalizes this chapter's raw verse strings into `(verse, text)` pairs
    /// per the translation's numbering rule.
    pub fn verses(&self, numbering: VerseNumbering) -> Vec<VerseRef> {
        let normalizer = VerseNormalizer::new(numbering);
        self.verses
            .iter()
            .enumerate()
            .map(|(index, raw)| normalizer.normalize(index, raw))
            .collect()
    }

    /// The raw verse strings, numbering prefix and all. Callers scanning many
    /// chapters pair this with one shared `VerseNormalizer`.
    pub fn raw_verses(&self) -> &[String] {
        &self.verses
    }
}

/// Applies one numbering rule to raw verse strings. Holds the compiled prefix
/// regex so a chapter or whole-translation scan compiles it once.
pub struct VerseNormalizer {
    numbering: VerseNumbering,
    prefix: Option<Regex>,
}

impl VerseNormalizer {
    pub fn new(numbering: VerseNumbering) -> Self {
        let prefix = match numbering {
            VerseNumbering::Positional => None,
            VerseNumbering::Prefixed => Some(Regex::new(r"^(\d+)\s+(.*)$").unwrap()),
        };
        Self { numbering, prefix }
    }

    pub fn normalize(&self, index: usize, raw: &str) -> VerseRef {
        match self.numbering {
            VerseNumbering::Positional => VerseRef {
                verse: index as u32 + 1,
                text: raw.to_string(),
            },
            VerseNumbering::Prefixed => {
                if let Some(caps) = self.prefix.as_ref().unwrap().captures(raw) {
                    if let Ok(number) = caps[1].parse::<u32>() {
                        return VerseRef {
                            verse: number,
                            text: caps[2].to_string(),
                        };
                    }
                }
                // No parsable leading integer: the whole string is verse 1.
                VerseRef {
                    verse: 1,
                    text: raw.to_string(),
                }
            }
        }
    }
}
