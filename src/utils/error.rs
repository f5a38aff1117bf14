use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Missing or empty pokemon name
    InvalidRequest(String),
    /// Name is not part of the catalog
    UnknownEntity(String),
    /// Upstream fetch failed for the named pokemon
    UpstreamError { name: String, cause: String },
    /// Record could not be serialized for the response
    EncodingError { name: String, cause: String },
    /// Catalog load failed, the server must not start
    StartupError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "{}", msg),
            AppError::UnknownEntity(name) => write!(f, "{:?} is not a known pokemon", name),
            AppError::UpstreamError { name, .. } => {
                write!(f, "error fetching pokemon {:?} record", name)
            }
            AppError::EncodingError { name, .. } => write!(f, "error rendering {:?} record", name),
            AppError::StartupError(msg) => write!(f, "Startup error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn missing_name() -> Self {
        AppError::InvalidRequest("must provide a pokemon name!".to_string())
    }

    /// Underlying cause, for the log line. Never sent to the client.
    pub fn cause(&self) -> Option<&str> {
        match self {
            AppError::UpstreamError { cause, .. } | AppError::EncodingError { cause, .. } => {
                Some(cause)
            }
            AppError::StartupError(msg) => Some(msg),
            _ => None,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::UnknownEntity(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
