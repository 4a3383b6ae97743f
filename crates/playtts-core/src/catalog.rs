//! Static catalog of supported languages, their voices and synthesis models

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, Result};

const ENGLISH_VOICES: &[&str] = &[
    "Arista-PlayAI",
    "Atlas-PlayAI",
    "Basil-PlayAI",
    "Briggs-PlayAI",
    "Calum-PlayAI",
    "Celeste-PlayAI",
    "Cheyenne-PlayAI",
    "Chip-PlayAI",
    "Cillian-PlayAI",
    "Deedee-PlayAI",
    "Fritz-PlayAI",
    "Gail-PlayAI",
    "Indigo-PlayAI",
    "Mamaw-PlayAI",
    "Mason-PlayAI",
    "Mikail-PlayAI",
    "Mitch-PlayAI",
    "Quinn-PlayAI",
    "Thunder-PlayAI",
];

const ARABIC_VOICES: &[&str] = &["Ahmad-PlayAI", "Amira-PlayAI", "Khalid-PlayAI", "Nasser-PlayAI"];

/// One supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language code accepted from callers (`en`, `ar`)
    pub code: String,
    /// Key under which the voice list is published (`english`, `arabic`)
    pub label: String,
    /// Human-readable name used in error messages
    pub name: String,
    /// Provider model identifier
    pub model: String,
    pub default_voice: String,
    /// Voice names in publication order
    pub voices: Vec<String>,
}

impl LanguageEntry {
    pub fn new(
        code: &str,
        label: &str,
        name: &str,
        model: &str,
        default_voice: &str,
        voices: &[&str],
    ) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            name: name.to_string(),
            model: model.to_string(),
            default_voice: default_voice.to_string(),
            voices: voices.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn has_voice(&self, voice: &str) -> bool {
        self.voices.iter().any(|v| v == voice)
    }
}

/// Immutable language → (voices, default voice, model) mapping
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    entries: Vec<LanguageEntry>,
}

impl VoiceCatalog {
    /// Build a catalog, checking that every default voice belongs to its
    /// language and that language codes are unique.
    pub fn new(entries: Vec<LanguageEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::ConfigError(
                "voice catalog needs at least one language".to_string(),
            ));
        }

        let mut codes = HashSet::new();
        for entry in &entries {
            if !codes.insert(entry.code.to_lowercase()) {
                return Err(Error::ConfigError(format!(
                    "duplicate language code '{}'",
                    entry.code
                )));
            }
            if entry.voices.is_empty() {
                return Err(Error::ConfigError(format!(
                    "language '{}' has no voices",
                    entry.code
                )));
            }
            if !entry.has_voice(&entry.default_voice) {
                return Err(Error::ConfigError(format!(
                    "default voice '{}' is not a {} voice",
                    entry.default_voice, entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The PlayAI voices served by Groq
    pub fn playai() -> Self {
        Self {
            entries: vec![
                LanguageEntry::new(
                    "en",
                    "english",
                    "English",
                    "playai-tts",
                    "Arista-PlayAI",
                    ENGLISH_VOICES,
                ),
                LanguageEntry::new(
                    "ar",
                    "arabic",
                    "Arabic",
                    "playai-tts-arabic",
                    "Ahmad-PlayAI",
                    ARABIC_VOICES,
                ),
            ],
        }
    }

    /// Look up a language by code, ignoring case
    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn codes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.code.clone()).collect()
    }

    /// Voice lists keyed by label plus the default voice per code
    pub fn listing(&self) -> VoiceListing {
        VoiceListing {
            voices: self
                .entries
                .iter()
                .map(|e| (e.label.clone(), e.voices.clone()))
                .collect(),
            defaults: self
                .entries
                .iter()
                .map(|e| (e.code.clone(), e.default_voice.clone()))
                .collect(),
        }
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::playai()
    }
}

/// Published view of the catalog
#[derive(Debug, Clone, Serialize)]
pub struct VoiceListing {
    #[serde(flatten)]
    pub voices: BTreeMap<String, Vec<String>>,
    pub defaults: BTreeMap<String, String>,
}
