use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use karmic_core::error::CoreError;
use karmic_instruments::error::InstrumentError;

/// Error returned by every route handler.
///
/// Answer bodies that fail to deserialize never get here; axum's `Json`
/// extractor rejects them with 422 before the handler runs.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown instrument id.
    NotFound(String),
    /// Malformed session key or out-of-domain input.
    BadRequest(String),
    /// Session store failure.
    Internal(String),
}

impl ApiError {
    /// Stable code clients can branch on without parsing `error`.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Internal(_) => "internal",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    kind: &'static str,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, error) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "session store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { kind, error })).into_response()
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("instrument not found: {id}"))
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidSessionKey(_) => ApiError::BadRequest(e.to_string()),
            CoreError::StorePoisoned => ApiError::Internal(e.to_string()),
        }
    }
}
