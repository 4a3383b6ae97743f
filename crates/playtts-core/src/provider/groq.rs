//! Groq speech client (OpenAI-compatible `/audio/speech` endpoint)

use async_trait::async_trait;
use futures::StreamExt;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::{BufferedSpeech, Capability, SpeechProvider, SpeechRequest, SpeechSession};
use crate::config::ProviderConfig;
use crate::error::{Error, Result};

/// Provider backed by the Groq HTTP API
pub struct GroqProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    streaming: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

impl GroqProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::ConfigError("provider api_key is not set".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: speech_endpoint(&config.base_url),
            api_key: config.api_key.clone(),
            streaming: config.streaming,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &SpeechRequest) -> Result<reqwest::Response> {
        debug!(
            "POST {} model={} voice={} ({} chars)",
            self.endpoint,
            request.model,
            request.voice,
            request.input.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Speech provider returned {}", status);
        Err(Error::SynthesisFailure(format!(
            "provider returned {}: {}",
            status,
            error_detail(&body)
        )))
    }
}

#[async_trait]
impl SpeechProvider for GroqProvider {
    async fn open_stream(
        &self,
        request: &SpeechRequest,
    ) -> Result<Capability<Box<dyn SpeechSession>>> {
        if !self.streaming {
            return Ok(Capability::Absent);
        }

        let response = self.send(request).await?;
        Ok(Capability::Available(Box::new(GroqSession {
            response: Some(response),
        })))
    }

    async fn create(&self, request: &SpeechRequest) -> Result<BufferedSpeech> {
        let response = self.send(request).await?;
        let content = response.bytes().await?;
        Ok(BufferedSpeech::from_bytes(content))
    }
}

struct GroqSession {
    response: Option<reqwest::Response>,
}

#[async_trait]
impl SpeechSession for GroqSession {
    async fn stream_to_file(&mut self, destination: &Path) -> Result<Capability<u64>> {
        let response = self
            .response
            .take()
            .ok_or_else(|| Error::SynthesisFailure("speech stream already consumed".to_string()))?;

        let mut file = tokio::fs::File::create(destination).await?;
        let mut chunks = response.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(Capability::Available(written))
    }

    async fn close(&mut self) {
        self.response = None;
    }
}

fn speech_endpoint(base_url: &str) -> String {
    format!("{}/audio/speech", base_url.trim_end_matches('/'))
}

/// Pull the message out of an OpenAI-style error body, falling back to the raw text
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
