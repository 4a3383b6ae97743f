//! Synthesis with streaming-first, buffered-fallback protocol

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::provider::{Capability, SpeechProvider, SpeechRequest};
use crate::selector::ResolvedTarget;

/// Turns a resolved target and text into a WAV file
#[derive(Clone)]
pub struct Synthesizer {
    provider: Arc<dyn SpeechProvider>,
}

impl Synthesizer {
    pub fn new(provider: Arc<dyn SpeechProvider>) -> Self {
        Self { provider }
    }

    /// Write the synthesized audio for `text` to `destination`.
    ///
    /// The streaming path is tried first; only an absent streaming capability
    /// leads to the buffered call. Every failure is reported as
    /// [`Error::SynthesisFailure`]. `destination` is left as-is on failure.
    pub async fn synthesize(
        &self,
        target: &ResolvedTarget,
        text: &str,
        destination: &Path,
    ) -> Result<()> {
        let request = SpeechRequest::wav(target, text);

        match self
            .stream_to_file(&request, destination)
            .await
            .map_err(synthesis_failure)?
        {
            Capability::Available(written) => {
                info!(
                    "Streamed {} bytes of {} audio to {}",
                    written,
                    target.voice,
                    destination.display()
                );
                return Ok(());
            }
            Capability::Absent => debug!("Streaming synthesis unavailable, using buffered call"),
        }

        self.write_buffered(&request, destination)
            .await
            .map_err(synthesis_failure)
    }

    async fn stream_to_file(
        &self,
        request: &SpeechRequest,
        destination: &Path,
    ) -> Result<Capability<u64>> {
        let mut session = match self.provider.open_stream(request).await? {
            Capability::Available(session) => session,
            Capability::Absent => return Ok(Capability::Absent),
        };

        let outcome = session.stream_to_file(destination).await;
        session.close().await;
        outcome
    }

    async fn write_buffered(&self, request: &SpeechRequest, destination: &Path) -> Result<()> {
        let response = self.provider.create(request).await?;
        let payload = response.into_payload().ok_or_else(|| {
            Error::SynthesisFailure(
                "unexpected binary response from speech provider (no stream/read/content available)"
                    .to_string(),
            )
        })?;

        let shape = payload.shape();
        let audio = payload.into_bytes().await?;
        tokio::fs::write(destination, &audio).await?;

        info!(
            "Wrote {} bytes of {} audio from {} payload to {}",
            audio.len(),
            request.voice,
            shape,
            destination.display()
        );
        Ok(())
    }
}

fn synthesis_failure(err: Error) -> Error {
    match err {
        Error::SynthesisFailure(_) => err,
        other => Error::SynthesisFailure(other.to_string()),
    }
}
