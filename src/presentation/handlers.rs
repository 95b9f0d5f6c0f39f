// HTTP request handlers
use crate::application::map_view::Presentation;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current view: loading text, error text, or the drawn scene as JSON
pub async fn map_view(State(state): State<Arc<AppState>>) -> Response {
    let presentation = state.presentation.borrow().clone();

    match presentation {
        Presentation::Loading => (StatusCode::ACCEPTED, presentation.to_string()).into_response(),
        Presentation::Error(_) => (StatusCode::BAD_GATEWAY, presentation.to_string()).into_response(),
        Presentation::Map { .. } => Json(state.scene.snapshot()).into_response(),
    }
}
