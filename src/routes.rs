use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::error::AskError;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Voice ask endpoint; anything but POST gets the plain-text 405
        .route("/ask", post(ask).fallback(method_not_allowed))
        // Recorder frontend
        .fallback_service(ServeDir::new(&state.config.public_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn method_not_allowed() -> AskError {
    AskError::MethodNotAllowed
}

async fn ask(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, AskError> {
    // A body that is not JSON at all takes the catch-all path, not the
    // field validation one.
    let payload: Value = serde_json::from_slice(&body).map_err(|e| AskError::Internal {
        message: e.to_string(),
    })?;

    let wav_base64 = payload
        .get("wavBase64")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AskError::Validation {
            message: "wavBase64 required".to_string(),
        })?
        .to_string();

    let api_key = state.config.google_api_key.clone().ok_or_else(|| {
        warn!("Rejecting /ask request: GOOGLE_API_KEY is not configured");
        AskError::MissingApiKey
    })?;

    let text = state.gemini.generate_reply(&api_key, &wav_base64).await?;
    info!("Answered /ask request with {} chars of text", text.len());

    Ok(Json(json!({ "text": text })))
}
