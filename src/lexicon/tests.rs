//! Lexicon Module Tests
//!
//! Validates dataset queries: language filtering, substring matching,
//! pagination bookkeeping, and lookup by Strong's number.

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::lexicon::store::{LexiconQuery, LexiconStore};
    use crate::lexicon::types::{LexiconData, LexiconEntry};

    fn entry(code: &str, word: &str, translit: &str, definition: &str, lang: &str) -> LexiconEntry {
        LexiconEntry {
            strongs_number: code.to_string(),
            original_word: word.to_string(),
            transliteration: translit.to_string(),
            pronunciation: String::new(),
            part_of_speech: String::new(),
            definition: definition.to_string(),
            usage: String::new(),
            language: lang.to_string(),
        }
    }

    fn sample_store() -> LexiconStore {
        LexiconStore::from_data(LexiconData {
            greek: vec![
                entry("G25", "ἀγαπάω", "agapao", "to love", "greek"),
                entry("G26", "ἀγάπη", "agape", "love, benevolence", "greek"),
                entry("G4102", "πίστις", "pistis", "faith, belief", "greek"),
            ],
            hebrew: vec![
                entry("H3068", "יְהֹוָה", "Yehovah", "the proper name of the God of Israel", "hebrew"),
                entry("H157", "אָהַב", "ahab", "to love", "hebrew"),
            ],
        })
    }

    fn query(search: Option<&str>, language: Option<&str>, page: usize, limit: usize) -> LexiconQuery {
        LexiconQuery {
            search: search.map(str::to_string),
            language: language.map(str::to_string),
            page,
            limit,
        }
    }

    // ============================================================
    // QUERY TESTS
    // ============================================================

    #[test]
    fn test_query_no_filters_returns_greek_then_hebrew() {
        let store = sample_store();

        let page = store.query(&query(None, None, 1, 100)).unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.entries[0].strongs_number, "G25");
        assert_eq!(page.entries[3].strongs_number, "H3068");
    }

    #[test]
    fn test_query_language_filter() {
        let store = sample_store();

        let greek = store.query(&query(None, Some("greek"), 1, 100)).unwrap();
        assert_eq!(greek.total, 3);
        assert!(greek.entries.iter().all(|e| e.language == "greek"));

        let hebrew = store.query(&query(None, Some("hebrew"), 1, 100)).unwrap();
        assert_eq!(hebrew.total, 2);
    }

    #[test]
    fn test_query_search_matches_word_translit_and_definition() {
        let store = sample_store();

        // Hits "to love" definitions in both languages plus "love, benevolence".
        let by_definition = store.query(&query(Some("love"), None, 1, 100)).unwrap();
        assert_eq!(by_definition.total, 3);

        let by_translit = store.query(&query(Some("pistis"), None, 1, 100)).unwrap();
        assert_eq!(by_translit.total, 1);
        assert_eq!(by_translit.entries[0].strongs_number, "G4102");

        let by_word = store.query(&query(Some("ἀγάπη"), None, 1, 100)).unwrap();
        assert_eq!(by_word.total, 1);
    }

    #[test]
    fn test_query_search_is_case_insensitive() {
        let store = sample_store();

        let page = store.query(&query(Some("LOVE"), None, 1, 100)).unwrap();
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_query_pagination() {
        let store = sample_store();

        let first = store.query(&query(None, None, 1, 2)).unwrap();
        assert_eq!(first.total, 5);
        assert_eq!(first.entries.len(), 2);
        assert_eq!(first.total_pages, 3);

        let last = store.query(&query(None, None, 3, 2)).unwrap();
        assert_eq!(last.entries.len(), 1);
        assert_eq!(last.entries[0].strongs_number, "H157");
    }

    #[test]
    fn test_query_page_past_the_end_is_empty() {
        let store = sample_store();

        let page = store.query(&query(None, None, 10, 2)).unwrap();
        assert!(page.entries.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_query_zero_limit_is_invalid() {
        let store = sample_store();

        let err = store.query(&query(None, None, 1, 0)).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_query_unknown_language_matches_nothing() {
        let store = sample_store();

        let page = store.query(&query(None, Some("aramaic"), 1, 100)).unwrap();
        assert_eq!(page.total, 0);
    }

    // ============================================================
    // LOOKUP TESTS
    // ============================================================

    #[test]
    fn test_get_by_strongs_number() {
        let store = sample_store();

        let entry = store.get("G25").expect("G25 should exist");
        assert_eq!(entry.transliteration, "agapao");

        let entry = store.get("H3068").expect("H3068 should exist");
        assert_eq!(entry.transliteration, "Yehovah");
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let store = sample_store();
        assert!(store.get("g25").is_some());
    }

    #[test]
    fn test_get_unknown_code() {
        let store = sample_store();
        assert!(store.get("G99999").is_none());
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(sample_store().entry_count(), 5);
    }
}
