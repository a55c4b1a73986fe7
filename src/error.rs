use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::gemini::GeminiError;

/// Every way /ask can fail, mapped to exactly one response. Only the
/// method check answers in plain text.
#[derive(Debug)]
pub enum AskError {
    MethodNotAllowed,
    Validation { message: String },
    MissingApiKey,
    Upstream { message: String },
    Internal { message: String },
}

impl IntoResponse for AskError {
    fn into_response(self) -> Response {
        match self {
            AskError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
            }
            AskError::Validation { message } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AskError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server missing GOOGLE_API_KEY" })),
            )
                .into_response(),
            AskError::Upstream { message } => {
                (StatusCode::BAD_GATEWAY, Json(json!({ "error": message }))).into_response()
            }
            AskError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

impl From<GeminiError> for AskError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Upstream { message } => AskError::Upstream { message },
            GeminiError::Transport(e) => AskError::Internal {
                message: e.to_string(),
            },
        }
    }
}
