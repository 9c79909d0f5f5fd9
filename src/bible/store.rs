//! Version Store
//!
//! Maps a translation identifier to its decoded text, loading and
//! decompressing exactly once per identifier per process lifetime. All other
//! accessors (`get_chapter`, `get_passage`, `get_books`, `get_chapter_count`)
//! operate on the cached structure.

use std::io::Read;
use std::sync::Arc;

use dashmap::DashMap;
use flate2::read::GzDecoder;
use tokio::sync::Mutex;

use crate::bible::catalog::{self, CatalogEntry};
use crate::bible::source::{SourceEncoding, TextSource};
use crate::bible::text::TranslationText;
use crate::bible::types::{ChapterView, PassageView, VersionInfo};
use crate::error::AppError;

pub struct VersionStore {
    source: Arc<dyn TextSource>,
    /// Translation cache, keyed by version id. Append-only; bounded by the
    /// catalog size.
    cache: DashMap<String, Arc<TranslationText>>,
    /// Serializes cache-miss loads so concurrent first requests for a version
    /// trigger a single read-and-decompress.
    load_lock: Mutex<()>,
}

impl VersionStore {
    pub fn new(source: Arc<dyn TextSource>) -> Self {
        Self {
            source,
            cache: DashMap::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// The catalog, filtered to versions whose backing file is present.
    pub fn list_versions(&self) -> Vec<VersionInfo> {
        catalog::CATALOG
            .iter()
            .filter(|entry| self.source.exists(entry.id))
            .map(VersionInfo::from_entry)
            .collect()
    }

    /// Returns the cached translation, loading it on first request.
    ///
    /// Fails with `NotFound` when the id is not in the catalog or its backing
    /// file is missing, and with `CorruptData` when decompression or parsing
    /// fails. A failed load leaves the cache unpopulated, so the next call
    /// retries from scratch.
    pub async fn load(&self, version_id: &str) -> Result<Arc<TranslationText>, AppError> {
        if let Some(cached) = self.cache.get(version_id) {
            return Ok(cached.clone());
        }

        let entry = catalog::find(version_id).ok_or_else(|| {
            AppError::NotFound(format!("Bible version '{}' not found", version_id))
        })?;

        let _guard = self.load_lock.lock().await;

        // A concurrent request may have finished the load while we waited.
        if let Some(cached) = self.cache.get(version_id) {
            return Ok(cached.clone());
        }

        let text = Arc::new(self.read_and_parse(entry)?);
        self.cache.insert(version_id.to_string(), text.clone());

        tracing::info!(
            version = version_id,
            books = text.books().len(),
            "loaded translation"
        );

        Ok(text)
    }

    fn read_and_parse(&self, entry: &CatalogEntry) -> Result<TranslationText, AppError> {
        let (bytes, encoding) = self.source.read(entry.id)?;

        let decoded = match encoding {
            SourceEncoding::Plain => bytes,
            SourceEncoding::Gzip => {
                let mut decoder = GzDecoder::new(bytes.as_slice());
                let mut decompressed = Vec::new();
                decoder.read_to_end(&mut decompressed).map_err(|e| {
                    AppError::CorruptData(format!(
                        "failed to decompress '{}' data: {}",
                        entry.id, e
                    ))
                })?;
                decompressed
            }
        };

        TranslationText::parse(&decoded, entry.numbering)
    }

    /// Looks up one chapter and normalizes its verses.
    pub async fn get_chapter(
        &self,
        version_id: &str,
        book: &str,
        chapter: u32,
    ) -> Result<ChapterView, AppError> {
        let text = self.load(version_id).await?;

        let book_text = text.book(book).ok_or_else(|| {
            AppError::NotFound(format!("book '{}' not found in {}", book, version_id))
        })?;

        let chapter_text = book_text.chapter(chapter).ok_or_else(|| {
            AppError::NotFound(format!(
                "chapter {} {} not found in {}",
                book, chapter, version_id
            ))
        })?;

        Ok(ChapterView {
            version: version_id.to_string(),
            book: book.to_string(),
            chapter,
            verses: chapter_text.verses(text.numbering()),
        })
    }

    /// Extracts an inclusive verse range from a chapter. An empty range (or
    /// `end < start`) yields an empty verse list, not an error.
    pub async fn get_passage(
        &self,
        version_id: &str,
        book: &str,
        chapter: u32,
        start_verse: u32,
        end_verse: Option<u32>,
    ) -> Result<PassageView, AppError> {
        let chapter_view = self.get_chapter(version_id, book, chapter).await?;
        let end = end_verse.unwrap_or(start_verse);

        let verses = chapter_view
            .verses
            .into_iter()
            .filter(|verse| verse.verse >= start_verse && verse.verse <= end)
            .collect();

        Ok(PassageView {
            version: chapter_view.version,
            book: chapter_view.book,
            chapter,
            start_verse,
            end_verse: end,
            verses,
        })
    }

    /// Book names in file order.
    pub async fn get_books(&self, version_id: &str) -> Result<Vec<String>, AppError> {
        let text = self.load(version_id).await?;
        Ok(text.books().iter().map(|book| book.name.clone()).collect())
    }

    pub async fn get_chapter_count(&self, version_id: &str, book: &str) -> Result<usize, AppError> {
        let text = self.load(version_id).await?;
        let book_text = text.book(book).ok_or_else(|| {
            AppError::NotFound(format!("book '{}' not found in {}", book, version_id))
        })?;
        Ok(book_text.chapters.len())
    }
}
