use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardioHubError {
    #[error("Dataset not found at {0}")]
    DatasetNotFound(PathBuf),

    #[error("Dataset is missing required column \"{0}\"")]
    MissingColumn(&'static str),

    #[error("Dataset parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CardioHubError>;

/// Error surface of the JSON API. Converts into a status code plus an
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<CardioHubError> for ApiError {
    fn from(err: CardioHubError) -> Self {
        match err {
            CardioHubError::DatasetNotFound(path) => {
                ApiError::NotFound(format!("dataset not found at {}", path.display()))
            }
            CardioHubError::MissingColumn(column) => {
                ApiError::Unprocessable(format!("dataset is missing column \"{column}\""))
            }
            CardioHubError::Csv(err) => ApiError::Unprocessable(format!("dataset unreadable: {err}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_not_found_maps_to_404() {
        let err: ApiError = CardioHubError::DatasetNotFound(PathBuf::from("/tmp/missing.csv")).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn missing_column_maps_to_unprocessable() {
        let err: ApiError = CardioHubError::MissingColumn("Gene Names").into();
        assert!(matches!(err, ApiError::Unprocessable(_)));
        assert!(err.to_string().contains("Gene Names"));
    }
}
