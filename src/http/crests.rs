use std::sync::Arc;

use axum::body::{boxed, Body};
use axum::extract::{Path, State};
use axum::http::Request;
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::domain::find_crest;

use super::errors::ApiError;
use super::AppState;

pub async fn find_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    request: Request<Body>,
) -> Result<Response, ApiError> {
    serve_crest(state, slug, request).await
}

/// Serves `/crests/<slug>.png`.
pub async fn find_by_file(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
    request: Request<Body>,
) -> Result<Response, ApiError> {
    match file.strip_suffix(".png") {
        Some(slug) => serve_crest(state, slug.to_string(), request).await,
        None => Err(ApiError::NotFound(format!("crest {} not found", file))),
    }
}

async fn serve_crest(
    state: Arc<AppState>,
    slug: String,
    request: Request<Body>,
) -> Result<Response, ApiError> {
    let crest = find_crest::execute(
        state.repo.clone(),
        find_crest::Request {
            slug: slug.clone(),
            crest_dir: state.crest_dir.clone(),
        },
    )
    .await
    .map_err(|err| match err {
        find_crest::Error::NotFound => ApiError::team_not_found(&slug),
        find_crest::Error::Unknown => ApiError::InternalServerError,
    })?;

    log::debug!("serving crest {}", crest.path.display());

    // A missing file is answered with an empty 404 by `ServeFile`.
    match ServeFile::new(&crest.path).oneshot(request).await {
        Ok(response) => Ok(response.map(boxed)),
        Err(err) => match err {},
    }
}
