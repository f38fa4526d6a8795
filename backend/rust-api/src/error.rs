//! API error type; every handler failure ends up here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name → messages, in the shape returned to clients.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid submission")]
    Validation(FieldErrors),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => json!({ "error": self.to_string(), "errors": errors }),
            ApiError::NotFound(_) => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
