//! Server error types and HTTP status mapping.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use bookstock_core::{BookValidationError, ServiceError};
use serde_json::json;
use thiserror::Error;

/// Fatal startup errors surfaced by `main`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// Request-scoped error; every variant maps to one response shape.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The id does not resolve to a stored record (including non-numeric
    /// path ids, which never match).
    #[error("Book not found")]
    NotFound,

    /// A field failed the validation contract.
    #[error("{0}")]
    Validation(BookValidationError),

    /// Unexpected fault during a store operation, reported generically.
    #[error("Server error")]
    Internal,
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Validation(err) => Self::Validation(err),
            ServiceError::NotFound(_) => Self::NotFound,
        }
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(err) => json!({
                "message": err.to_string(),
                "field": err.field(),
            }),
            other => json!({ "message": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
