//! Word Study HTTP Handlers
//!
//! All routes require a `Authorization: Bearer <token>` header matching the
//! token the server was started with.

use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;

use crate::error::AppError;
use crate::studies::store::WordStudyStore;
use crate::studies::types::{
    CreateStudyRequest, DeleteStudyResponse, UpdateStudyRequest, WordStudy,
};

/// The token word-study routes are checked against.
#[derive(Clone)]
pub struct AuthToken(pub Arc<String>);

fn authorize(headers: &HeaderMap, token: &AuthToken) -> Result<(), AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".into()))?;

    match header.strip_prefix("Bearer ") {
        Some(presented) if presented == token.0.as_str() => Ok(()),
        _ => Err(AppError::Unauthorized("Invalid or expired session".into())),
    }
}

pub async fn handle_list_studies(
    headers: HeaderMap,
    Extension(token): Extension<AuthToken>,
    Extension(store): Extension<Arc<WordStudyStore>>,
) -> Result<Json<Vec<WordStudy>>, AppError> {
    authorize(&headers, &token)?;
    Ok(Json(store.list()))
}

pub async fn handle_create_study(
    headers: HeaderMap,
    Extension(token): Extension<AuthToken>,
    Extension(store): Extension<Arc<WordStudyStore>>,
    Json(req): Json<CreateStudyRequest>,
) -> Result<Json<WordStudy>, AppError> {
    authorize(&headers, &token)?;
    let study = store.create(req);
    tracing::info!(id = study.id, "created word study");
    Ok(Json(study))
}

pub async fn handle_update_study(
    headers: HeaderMap,
    Path(id): Path<u32>,
    Extension(token): Extension<AuthToken>,
    Extension(store): Extension<Arc<WordStudyStore>>,
    Json(req): Json<UpdateStudyRequest>,
) -> Result<Json<WordStudy>, AppError> {
    authorize(&headers, &token)?;
    store
        .update(id, req)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Word study not found".into()))
}

pub async fn handle_delete_study(
    headers: HeaderMap,
    Path(id): Path<u32>,
    Extension(token): Extension<AuthToken>,
    Extension(store): Extension<Arc<WordStudyStore>>,
) -> Result<Json<DeleteStudyResponse>, AppError> {
    authorize(&headers, &token)?;
    if store.delete(id) {
        Ok(Json(DeleteStudyResponse { success: true }))
    } else {
        Err(AppError::NotFound("Word study not found".into()))
    }
}
