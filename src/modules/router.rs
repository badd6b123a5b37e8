use super::list;
use crate::types::Context;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "AniList list renderer is up" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/health", get(health_check))
        .merge(list::get_router())
}
