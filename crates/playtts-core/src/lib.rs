//! playtts core - text-to-speech pipeline backed by a remote provider
//!
//! A request flows through three pieces:
//! - [`Selector`] validates the language and voice against the
//!   [`VoiceCatalog`] and yields a [`ResolvedTarget`]
//! - [`ScratchDir`] allocates a [`ScopedAudioFile`] that is deleted exactly once
//! - [`Synthesizer`] fills the file from a [`SpeechProvider`], streaming when
//!   the provider can and falling back to a buffered call otherwise
//!
//! # Example
//!
//! ```ignore
//! use playtts_core::{GroqProvider, ScratchDir, Selector, Synthesizer, ServiceConfig};
//!
//! let config = ServiceConfig::default();
//! let selector = Selector::default();
//! let synthesizer = Synthesizer::new(Arc::new(GroqProvider::new(&config.provider)?));
//!
//! let target = selector.resolve(Some("ar"), None)?;
//! let mut audio = ScratchDir::from_config(&config.scratch).allocate()?;
//! if let Err(e) = synthesizer.synthesize(&target, "marhaba", audio.path()).await {
//!     audio.release();
//!     return Err(e);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod provider;
pub mod scratch;
pub mod selector;
pub mod synthesizer;

pub use catalog::{LanguageEntry, VoiceCatalog, VoiceListing};
pub use config::{ProviderConfig, ScratchConfig, ServerConfig, ServiceConfig};
pub use error::{Error, Result};
pub use provider::{
    AudioFormat, BufferedSpeech, Capability, GroqProvider, SpeechPayload, SpeechProvider,
    SpeechRequest, SpeechSession,
};
pub use scratch::{ScopedAudioFile, ScratchDir};
pub use selector::{ResolvedTarget, Selector, SynthesisRequest, DEFAULT_LANGUAGE};
pub use synthesizer::Synthesizer;
