use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown molecule: {0}")]
    UnknownMolecule(String),
    #[error("invalid model file name: {0}")]
    InvalidModelName(String),
    #[error("model not found: {0}")]
    ModelNotFound(String),
    #[error("config: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::UnknownMolecule(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidModelName(_) => StatusCode::BAD_REQUEST,
            Error::ModelNotFound(_) => StatusCode::NOT_FOUND,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
