//! Voice catalog endpoint

use axum::{extract::State, Json};
use playtts_core::VoiceListing;

use crate::state::AppState;

/// List voices per language and the default voice for each language code
pub async fn list(State(state): State<AppState>) -> Json<VoiceListing> {
    Json(state.selector.catalog().listing())
}
