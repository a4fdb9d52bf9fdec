use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::entities::{Selector, Team, TeamPatch};
use crate::domain::{create_team, delete_team, find_all_teams, find_team, update_team};

use super::errors::ApiError;
use super::AppState;

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<create_team::Request>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    match create_team::execute(state.repo.clone(), payload).await {
        Ok(team) => {
            log::info!("created team {} with id {}", team.slug, team.id);
            Ok((StatusCode::CREATED, Json(team)))
        }
        Err(create_team::Error::Conflict(slug)) => Err(ApiError::slug_taken(slug)),
        Err(create_team::Error::Unknown) => Err(ApiError::InternalServerError),
    }
}

pub async fn find_all(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Team>>, ApiError> {
    match find_all_teams::execute(state.repo.clone()).await {
        Ok(teams) => Ok(Json(teams)),
        Err(find_all_teams::Error::Unknown) => Err(ApiError::InternalServerError),
    }
}

pub async fn find_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    find(state, Selector::Id(id)).await
}

pub async fn find_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Team>, ApiError> {
    find(state, Selector::Slug(slug)).await
}

pub async fn update_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TeamPatch>,
) -> Result<Json<Team>, ApiError> {
    update(state, Selector::Id(id), patch).await
}

pub async fn update_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(patch): Json<TeamPatch>,
) -> Result<Json<Team>, ApiError> {
    update(state, Selector::Slug(slug), patch).await
}

pub async fn delete_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete(state, Selector::Id(id)).await
}

pub async fn delete_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete(state, Selector::Slug(slug)).await
}

async fn find(state: Arc<AppState>, selector: Selector) -> Result<Json<Team>, ApiError> {
    match find_team::execute(
        state.repo.clone(),
        find_team::Request {
            selector: selector.clone(),
        },
    )
    .await
    {
        Ok(team) => Ok(Json(team)),
        Err(find_team::Error::NotFound) => Err(ApiError::team_not_found(selector)),
        Err(find_team::Error::Unknown) => Err(ApiError::InternalServerError),
    }
}

async fn update(
    state: Arc<AppState>,
    selector: Selector,
    patch: TeamPatch,
) -> Result<Json<Team>, ApiError> {
    match update_team::execute(
        state.repo.clone(),
        update_team::Request {
            selector: selector.clone(),
            patch,
        },
    )
    .await
    {
        Ok(team) => {
            log::info!("updated team {} with id {}", team.slug, team.id);
            Ok(Json(team))
        }
        Err(update_team::Error::NotFound) => Err(ApiError::team_not_found(selector)),
        Err(update_team::Error::Conflict(slug)) => Err(ApiError::slug_taken(slug)),
        Err(update_team::Error::Unknown) => Err(ApiError::InternalServerError),
    }
}

async fn delete(state: Arc<AppState>, selector: Selector) -> Result<StatusCode, ApiError> {
    match delete_team::execute(
        state.repo.clone(),
        delete_team::Request {
            selector: selector.clone(),
        },
    )
    .await
    {
        Ok(()) => {
            log::info!("deleted team {}", selector);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(delete_team::Error::NotFound) => Err(ApiError::team_not_found(selector)),
        Err(delete_team::Error::Unknown) => Err(ApiError::InternalServerError),
    }
}
