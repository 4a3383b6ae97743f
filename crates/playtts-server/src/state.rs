//! Application state management

use playtts_core::{
    GroqProvider, Result, ScratchDir, Selector, ServiceConfig, SpeechProvider, Synthesizer,
    VoiceCatalog,
};
use std::sync::Arc;

/// Shared application state; read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<Selector>,
    pub synthesizer: Arc<Synthesizer>,
    pub scratch: Arc<ScratchDir>,
}

impl AppState {
    pub fn new(selector: Selector, provider: Arc<dyn SpeechProvider>, scratch: ScratchDir) -> Self {
        Self {
            selector: Arc::new(selector),
            synthesizer: Arc::new(Synthesizer::new(provider)),
            scratch: Arc::new(scratch),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let provider = GroqProvider::new(&config.provider)?;
        Ok(Self::new(
            Selector::new(VoiceCatalog::playai()),
            Arc::new(provider),
            ScratchDir::from_config(&config.scratch),
        ))
    }
}
