//! Bible HTTP Handlers
//!
//! Maps the REST routes onto the store and search operations. Error
//! translation (404/400/500 with a JSON body) lives on `AppError` itself;
//! handlers just propagate with `?`.

use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;

use crate::bible::search;
use crate::bible::store::VersionStore;
use crate::bible::types::{
    ChapterCountResponse, ChapterView, PassageView, SearchResult, VersionInfo,
};
use crate::error::AppError;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "kjv".to_string()
}

pub async fn handle_list_versions(
    Extension(store): Extension<Arc<VersionStore>>,
) -> Json<Vec<VersionInfo>> {
    Json(store.list_versions())
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<VersionStore>>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    let results = search::search(&store, &params.version, &params.q).await?;
    tracing::debug!(
        version = %params.version,
        query = %params.q,
        count = results.len(),
        "search completed"
    );
    Ok(Json(results))
}

pub async fn handle_get_books(
    Path(version): Path<String>,
    Extension(store): Extension<Arc<VersionStore>>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(store.get_books(&version).await?))
}

pub async fn handle_chapter_count(
    Path((version, book)): Path<(String, String)>,
    Extension(store): Extension<Arc<VersionStore>>,
) -> Result<Json<ChapterCountResponse>, AppError> {
    let chapter_count = store.get_chapter_count(&version, &book).await?;
    Ok(Json(ChapterCountResponse { chapter_count }))
}

pub async fn handle_get_chapter(
    Path((version, book, chapter)): Path<(String, String, u32)>,
    Extension(store): Extension<Arc<VersionStore>>,
) -> Result<Json<ChapterView>, AppError> {
    Ok(Json(store.get_chapter(&version, &book, chapter).await?))
}

pub async fn handle_get_passage(
    Path((version, book, chapter, verses)): Path<(String, String, u32, String)>,
    Extension(store): Extension<Arc<VersionStore>>,
) -> Result<Json<PassageView>, AppError> {
    let (start, end) = parse_verse_range(&verses)?;
    Ok(Json(
        store.get_passage(&version, &book, chapter, start, end).await?,
    ))
}

/// Parses a verse range path segment: "16" or "16-18".
fn parse_verse_range(raw: &str) -> Result<(u32, Option<u32>), AppError> {
    let invalid =
        || AppError::InvalidArgument(format!("invalid verse range '{}'", raw));

    match raw.split_once('-') {
        Some((start, end)) => {
            let start = start.parse().map_err(|_| invalid())?;
            let end = end.parse().map_err(|_| invalid())?;
            Ok((start, Some(end)))
        }
        None => Ok((raw.parse().map_err(|_| invalid())?, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_verse_range;

    #[test]
    fn test_parse_single_verse() {
        assert_eq!(parse_verse_range("16").unwrap(), (16, None));
    }

    #[test]
    fn test_parse_verse_range() {
        assert_eq!(parse_verse_range("16-18").unwrap(), (16, Some(18)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_verse_range("sixteen").is_err());
        assert!(parse_verse_range("16-").is_err());
        assert!(parse_verse_range("").is_err());
    }
}
