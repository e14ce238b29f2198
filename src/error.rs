//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every failure a blame can hit and implements Axum's
//! `IntoResponse` so the HTTP surface turns them into JSON error bodies.
//!
//! Error mappings:
//! - `PathNotFound`, `NotVersioned` → 404
//! - `InvalidPath` → 400
//! - `Svn`, `SvnUnavailable`, `Parse`, `Io`, `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("svn {command} failed: {message}")]
    Svn { command: String, message: String },

    #[error("Unable to run {binary}: {source}")]
    SvnUnavailable {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not under version control: {0}")]
    NotVersioned(String),

    #[error("Unable to parse svn output: {0}")]
    Parse(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<quick_xml::DeError> for AppError {
    fn from(e: quick_xml::DeError) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::PathNotFound(_) | AppError::NotVersioned(_) => StatusCode::NOT_FOUND,
            AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::Svn { .. }
            | AppError::SvnUnavailable { .. }
            | AppError::Parse(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::NotVersioned("a.txt".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidPath("../a".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let svn = AppError::Svn {
            command: "blame".into(),
            message: "E160013".into(),
        };
        assert_eq!(svn.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(svn.to_string(), "svn blame failed: E160013");
    }
}
