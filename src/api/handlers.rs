use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use super::{HealthResponse, StoryResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::story::StoryPrompt;

pub async fn story(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<StoryResponse>, AppError> {
    // Missing credential wins over any problem with the body
    state.stories.generator()?;

    let request = read_body(&body)?;
    let prompt = StoryPrompt::parse(request.get("prompt"))?;

    let story = state.stories.tell(&prompt).await?;
    Ok(Json(StoryResponse { story }))
}

/// Parse the body as JSON. Unparseable and `null` bodies fail the request
/// as a whole; any other value is checked for a `prompt` field.
fn read_body(body: &[u8]) -> Result<Value, AppError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Err(AppError::UnreadableBody(
            "request body must not be null".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::UnreadableBody(format!("invalid JSON body: {}", e))),
    }
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let model = state
        .stories
        .generator()
        .ok()
        .map(|g| g.model().to_string());

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model,
        configured: state.stories.is_configured(),
    })
}
