//! Text Search Engine
//!
//! Case-insensitive substring search over one translation's full text. A
//! linear scan in structural order (book file order, then numeric chapter
//! order, then verse order) that emits one result per matching verse with the
//! byte offsets of every occurrence, short-circuiting once the result cap is
//! hit. Plain containment only: no tokenization, no stemming, no ranking.

use crate::bible::store::VersionStore;
use crate::bible::text::VerseNormalizer;
use crate::bible::types::{Highlight, SearchResult};
use crate::error::AppError;

/// Results are the first `MAX_RESULTS` matches in scan order, not the most
/// relevant ones.
pub const MAX_RESULTS: usize = 100;

/// Scans all verses of `version_id` for `query` as a case-insensitive
/// substring.
///
/// Fails with `InvalidArgument` on an empty query and propagates the store's
/// load failures unchanged.
pub async fn search(
    store: &VersionStore,
    version_id: &str,
    query: &str,
) -> Result<Vec<SearchResult>, AppError> {
    if query.is_empty() {
        return Err(AppError::InvalidArgument("Query parameter required".into()));
    }

    let text = store.load(version_id).await?;
    let needle = query.to_lowercase();
    let normalizer = VerseNormalizer::new(text.numbering());

    let mut results = Vec::new();
    for book in text.books() {
        for chapter in &book.chapters {
            for (index, raw) in chapter.raw_verses().iter().enumerate() {
                let verse = normalizer.normalize(index, raw);
                let lowered = verse.text.to_lowercase();
                let highlights = match_spans(&lowered, &needle);
                if highlights.is_empty() {
                    continue;
                }

                results.push(SearchResult {
                    book: book.name.clone(),
                    chapter: chapter.number,
                    verse: verse.verse,
                    text: verse.text,
                    highlights,
                });

                if results.len() == MAX_RESULTS {
                    return Ok(results);
                }
            }
        }
    }

    Ok(results)
}

/// Every occurrence of `needle` in `haystack`, as `[start, end)` byte spans.
///
/// The scan resumes one character past each match start, so occurrences that
/// overlap a previous match are still reported ("aa" in "aaa" yields spans at
/// 0 and 1). Both inputs are expected to be lowercased already.
fn match_spans(haystack: &str, needle: &str) -> Vec<Highlight> {
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        spans.push(Highlight {
            start,
            end: start + needle.len(),
        });

        // Advance by one character, not one byte, to stay on a boundary.
        let step = haystack[start..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        from = start + step;
        if from >= haystack.len() {
            break;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::match_spans;

    #[test]
    fn test_match_spans_single_occurrence() {
        let spans = match_spans("in the beginning", "beginning");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 7);
        assert_eq!(spans[0].end, 16);
    }

    #[test]
    fn test_match_spans_overlapping() {
        // Overlapping occurrences are all reported.
        let spans = match_spans("aaa", "aa");
        let starts: Vec<usize> = spans.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 1]);
    }

    #[test]
    fn test_match_spans_no_match() {
        assert!(match_spans("in the beginning", "zebra").is_empty());
    }

    #[test]
    fn test_match_spans_multibyte_haystack() {
        // The resume step must not split a multi-byte character.
        let spans = match_spans("πίστις and πίστις", "πίστις");
        assert_eq!(spans.len(), 2);
        for span in &spans {
            assert_eq!(&"πίστις and πίστις"[span.start..span.end], "πίστις");
        }
    }
}
