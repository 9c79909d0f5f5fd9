//! Lexicon HTTP Handlers

use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::lexicon::store::{LexiconQuery, LexiconStore};
use crate::lexicon::types::{LexiconEntry, LexiconPage};

#[derive(Deserialize)]
pub struct LexiconParams {
    pub search: Option<String>,
    pub language: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    100
}

pub async fn handle_query(
    Query(params): Query<LexiconParams>,
    Extension(store): Extension<Arc<LexiconStore>>,
) -> Result<Json<LexiconPage>, AppError> {
    let page = store.query(&LexiconQuery {
        search: params.search,
        language: params.language,
        page: params.page,
        limit: params.limit,
    })?;
    Ok(Json(page))
}

pub async fn handle_get_entry(
    Path(code): Path<String>,
    Extension(store): Extension<Arc<LexiconStore>>,
) -> Result<Json<LexiconEntry>, AppError> {
    store
        .get(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("lexicon entry '{}' not found", code)))
}
