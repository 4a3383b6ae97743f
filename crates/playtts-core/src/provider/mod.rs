//! Remote speech provider abstraction
//!
//! A provider offers two ways to obtain audio: a streaming session that can
//! write its result straight to a file, and a buffered call returning the
//! whole payload. Either capability may be missing for a given client, which
//! is reported as [`Capability::Absent`] rather than an error.

mod groq;

pub use groq::GroqProvider;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::path::Path;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::Result;
use crate::selector::ResolvedTarget;

/// Whether an optional provider feature is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability<T> {
    Available(T),
    Absent,
}

/// Audio container requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
}

impl AudioFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
        }
    }
}

/// Body of a speech request, in the provider's wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    pub input: String,
    pub response_format: AudioFormat,
}

impl SpeechRequest {
    pub fn wav(target: &ResolvedTarget, text: &str) -> Self {
        Self {
            model: target.model.clone(),
            voice: target.voice.clone(),
            input: text.to_string(),
            response_format: AudioFormat::Wav,
        }
    }
}

pub type AudioReader = Pin<Box<dyn AsyncRead + Send>>;

#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Open a streaming synthesis session for `request`.
    async fn open_stream(&self, request: &SpeechRequest)
        -> Result<Capability<Box<dyn SpeechSession>>>;

    /// Synthesize `request` in one non-streaming call.
    async fn create(&self, request: &SpeechRequest) -> Result<BufferedSpeech>;
}

/// An open streaming response
#[async_trait]
pub trait SpeechSession: Send {
    /// Write the whole audio stream to `destination`, returning the number
    /// of bytes written.
    async fn stream_to_file(&mut self, destination: &Path) -> Result<Capability<u64>>;

    /// Release the underlying connection. Must be safe to call more than once.
    async fn close(&mut self);
}

/// Wrapper exposing a readable stream one level down
pub struct RawStream {
    pub reader: Option<AudioReader>,
}

/// Non-streaming provider response.
///
/// Clients expose the payload in different places; at most one is expected to
/// be populated and [`BufferedSpeech::into_payload`] picks it.
#[derive(Default)]
pub struct BufferedSpeech {
    pub reader: Option<AudioReader>,
    pub content: Option<Bytes>,
    pub raw: Option<RawStream>,
}

impl BufferedSpeech {
    pub fn from_bytes(content: impl Into<Bytes>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn from_reader(reader: impl AsyncRead + Send + 'static) -> Self {
        Self {
            reader: Some(Box::pin(reader)),
            ..Default::default()
        }
    }

    pub fn from_raw(reader: impl AsyncRead + Send + 'static) -> Self {
        Self {
            raw: Some(RawStream {
                reader: Some(Box::pin(reader)),
            }),
            ..Default::default()
        }
    }

    /// Resolve the payload shape: readable stream first, then the byte
    /// buffer, then a readable nested raw stream.
    pub fn into_payload(self) -> Option<SpeechPayload> {
        if let Some(reader) = self.reader {
            return Some(SpeechPayload::Readable(reader));
        }
        if let Some(content) = self.content {
            return Some(SpeechPayload::Buffer(content));
        }
        self.raw
            .and_then(|raw| raw.reader)
            .map(SpeechPayload::NestedRaw)
    }
}

/// Audio payload of a buffered response
pub enum SpeechPayload {
    Readable(AudioReader),
    Buffer(Bytes),
    NestedRaw(AudioReader),
}

impl SpeechPayload {
    pub fn shape(&self) -> &'static str {
        match self {
            SpeechPayload::Readable(_) => "readable",
            SpeechPayload::Buffer(_) => "buffer",
            SpeechPayload::NestedRaw(_) => "raw",
        }
    }

    /// Drain the payload into memory
    pub async fn into_bytes(self) -> Result<Bytes> {
        match self {
            SpeechPayload::Buffer(bytes) => Ok(bytes),
            SpeechPayload::Readable(mut reader) | SpeechPayload::NestedRaw(mut reader) => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data).await?;
                Ok(Bytes::from(data))
            }
        }
    }
}

impl std::fmt::Debug for SpeechPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SpeechPayload").field(&self.shape()).finish()
    }
}
