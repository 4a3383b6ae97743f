//! Text-to-speech endpoints

use axum::{
    body::Body,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use playtts_core::{AudioFormat, ResolvedTarget, ScopedAudioFile, SynthesisRequest};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Stem of the suggested download filename
const DOWNLOAD_STEM: &str = "speech";

/// Query parameters of `GET /tts`
#[derive(Debug, Deserialize)]
pub struct TtsQuery {
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_text() -> String {
    "Hello world !!".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl From<TtsQuery> for SynthesisRequest {
    fn from(query: TtsQuery) -> Self {
        SynthesisRequest {
            text: query.text,
            voice: query.voice,
            language: Some(query.lang),
        }
    }
}

/// `GET /tts`
pub async fn speak_query(
    State(state): State<AppState>,
    Query(query): Query<TtsQuery>,
) -> Result<Response, ApiError> {
    speak(&state, query.into()).await
}

/// `POST /tts`
pub async fn speak_json(
    State(state): State<AppState>,
    Json(request): Json<SynthesisRequest>,
) -> Result<Response, ApiError> {
    speak(&state, request).await
}

async fn speak(state: &AppState, request: SynthesisRequest) -> Result<Response, ApiError> {
    let target = state.selector.resolve_request(&request)?;

    let request_id = Uuid::new_v4();
    info!(
        "TTS request {}: {} chars, model: {}, voice: {}",
        request_id,
        request.text.len(),
        target.model,
        target.voice
    );

    let format = AudioFormat::Wav;
    let mut audio = state.scratch.allocate_for(format)?;

    let size = match fill(state, &target, &request.text, &audio).await {
        Ok(size) => size,
        Err(e) => {
            audio.release();
            error!("TTS request {} failed: {}", request_id, e);
            return Err(e.into());
        }
    };

    info!("TTS request {} ready: {} bytes", request_id, size);

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (header::CONTENT_LENGTH, size.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}.{}\"",
                DOWNLOAD_STEM,
                format.extension()
            ),
        ),
    ];
    Ok((headers, Body::from_stream(audio.into_body_stream())).into_response())
}

/// Synthesize into the scratch file and report its final size
async fn fill(
    state: &AppState,
    target: &ResolvedTarget,
    text: &str,
    audio: &ScopedAudioFile,
) -> playtts_core::Result<u64> {
    state.synthesizer.synthesize(target, text, audio.path()).await?;
    audio.size().await
}
