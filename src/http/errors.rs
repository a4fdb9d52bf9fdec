use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, PartialEq)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    InternalServerError,
}

impl ApiError {
    pub fn team_not_found(key: impl Display) -> Self {
        ApiError::NotFound(format!("team {} not found", key))
    }

    pub fn slug_taken(slug: impl Display) -> Self {
        ApiError::Conflict(format!("team slug {} already exists", slug))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };
        let body = Json(json!({
            "detail": detail,
        }));
        (status, body).into_response()
    }
}
