use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::constants::API_NAME;
use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Automobile not found: {0}")]
    NotFound(String),

    #[error("Invalid automobile: {0}")]
    InvalidAutomobile(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NO_CONTENT,
            AppError::InvalidAutomobile(_) | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateVin { .. } => AppError::Conflict(err.to_string()),
            RepositoryError::Missing { .. } => AppError::NotFound(err.to_string()),
            RepositoryError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::InvalidAutomobile(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidAutomobile(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = match self {
            // "Nothing to show" and rejected payloads carry no body
            AppError::NotFound(msg) => {
                tracing::debug!("{} Not found: {}", API_NAME, msg);
                return status.into_response();
            }
            AppError::InvalidAutomobile(msg) => {
                tracing::warn!("{} Invalid automobile: {}", API_NAME, msg);
                return status.into_response();
            }
            AppError::InvalidQuery(msg) => {
                tracing::warn!("{} Invalid query: {}", API_NAME, msg);
                return status.into_response();
            }
            AppError::Conflict(msg) => {
                tracing::warn!("{} Conflict: {}", API_NAME, msg);
                msg
            }
            AppError::Database(e) => {
                tracing::error!("{} Database error: {}", API_NAME, e);
                format!("Database error: {}", e)
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
