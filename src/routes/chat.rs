use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub const ROOT_GREETING: &str = "Chatbot działa! 🌱";

pub async fn root_handler() -> &'static str {
    ROOT_GREETING
}

pub async fn chat_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;

    let message = match payload.message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::MissingMessage),
    };

    Ok(Json(ChatResponse {
        response: generate_reply(&message).to_string(),
    }))
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        database: state.database.status().await,
    })
}
