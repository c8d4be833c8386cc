//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{BoardSummaryDto, HealthDto, MessageDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Messages, most recent first
pub async fn get_messages(State(state): State<Arc<AppState>>) -> Json<Vec<MessageDto>> {
    let messages = state.list_messages_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(messages.into_iter().map(MessageDto::from).collect())
}

/// Live user and message counters
pub async fn get_board_summary(State(state): State<Arc<AppState>>) -> Json<BoardSummaryDto> {
    let summary = state.get_board_summary_usecase.execute().await;
    Json(summary.into())
}
