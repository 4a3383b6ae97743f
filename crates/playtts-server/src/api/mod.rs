//! HTTP routes

mod tts;
mod voices;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_router(state: AppState, cors_enabled: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/voices", get(voices::list))
        .route("/tts", get(tts::speak_query).post(tts::speak_json))
        .route("/tts/", get(tts::speak_query).post(tts::speak_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
