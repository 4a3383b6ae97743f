//! Language and voice selection against the voice catalog

use serde::Deserialize;
use std::sync::Arc;

use crate::catalog::VoiceCatalog;
use crate::error::{Error, Result};

/// Language used when the caller does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Inbound synthesis request, as parsed from the HTTP layer
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default, rename = "lang")]
    pub language: Option<String>,
}

/// Validated (model, voice) pair handed to the synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub model: String,
    pub voice: String,
}

/// Resolves requested language and voice into a synthesis target
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: Arc<VoiceCatalog>,
}

impl Selector {
    pub fn new(catalog: VoiceCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    /// Resolve a language code and optional voice.
    ///
    /// A missing or blank language means [`DEFAULT_LANGUAGE`]; a missing or
    /// empty voice means the language's default voice. Voices are matched
    /// exactly, so surrounding whitespace makes a voice invalid.
    pub fn resolve(&self, language: Option<&str>, voice: Option<&str>) -> Result<ResolvedTarget> {
        let code = non_empty(language).unwrap_or(DEFAULT_LANGUAGE);

        let entry = self
            .catalog
            .get(code)
            .ok_or_else(|| Error::InvalidLanguage {
                allowed: self.catalog.codes(),
            })?;

        let voice = voice
            .filter(|v| !v.is_empty())
            .unwrap_or(entry.default_voice.as_str());
        if !entry.has_voice(voice) {
            return Err(Error::InvalidVoice {
                name: entry.name.clone(),
                voices: entry.voices.clone(),
            });
        }

        Ok(ResolvedTarget {
            model: entry.model.clone(),
            voice: voice.to_string(),
        })
    }

    pub fn resolve_request(&self, request: &SynthesisRequest) -> Result<ResolvedTarget> {
        self.resolve(request.language.as_deref(), request.voice.as_deref())
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(VoiceCatalog::default())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LanguageEntry;

    fn target(model: &str, voice: &str) -> ResolvedTarget {
        ResolvedTarget {
            model: model.to_string(),
            voice: voice.to_string(),
        }
    }

    #[test]
    fn test_english_default() {
        let selector = Selector::default();
        assert_eq!(
            selector.resolve(Some("en"), None).unwrap(),
            target("playai-tts", "Arista-PlayAI")
        );
    }

    #[test]
    fn test_arabic_explicit_voice() {
        let selector = Selector::default();
        assert_eq!(
            selector.resolve(Some("ar"), Some("Khalid-PlayAI")).unwrap(),
            target("playai-tts-arabic", "Khalid-PlayAI")
        );
    }

    #[test]
    fn test_missing_or_empty_language_falls_back_to_english() {
        let selector = Selector::default();
        let expected = target("playai-tts", "Arista-PlayAI");
        assert_eq!(selector.resolve(None, None).unwrap(), expected);
        assert_eq!(selector.resolve(Some(""), Some("")).unwrap(), expected);
    }

    #[test]
    fn test_language_is_case_insensitive() {
        let selector = Selector::default();
        assert_eq!(
            selector.resolve(Some("AR"), None).unwrap(),
            target("playai-tts-arabic", "Ahmad-PlayAI")
        );
    }

    #[test]
    fn test_unknown_language() {
        let selector = Selector::default();
        for lang in ["fr", "english", "e n"] {
            let err = selector.resolve(Some(lang), None).unwrap_err();
            assert!(matches!(err, Error::InvalidLanguage { .. }), "{lang}");
            assert_eq!(err.to_string(), "lang must be 'en' or 'ar'");
        }
    }

    #[test]
    fn test_voice_from_other_language_is_rejected() {
        let selector = Selector::default();
        let err = selector.resolve(Some("en"), Some("Khalid-PlayAI")).unwrap_err();
        match err {
            Error::InvalidVoice { name, voices } => {
                assert_eq!(name, "English");
                assert_eq!(voices, selector.catalog().get("en").unwrap().voices);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_voice_is_matched_exactly() {
        let selector = Selector::default();
        for voice in [" Khalid-PlayAI", "Khalid-PlayAI ", "   ", "khalid-playai"] {
            assert!(
                matches!(
                    selector.resolve(Some("ar"), Some(voice)),
                    Err(Error::InvalidVoice { .. })
                ),
                "{voice:?}"
            );
        }
    }

    #[test]
    fn test_every_catalog_voice_resolves() {
        let selector = Selector::default();
        for entry in selector.catalog().entries() {
            assert_eq!(
                selector.resolve(Some(&entry.code), None).unwrap(),
                target(&entry.model, &entry.default_voice)
            );
            for voice in &entry.voices {
                assert_eq!(
                    selector.resolve(Some(&entry.code), Some(voice)).unwrap(),
                    target(&entry.model, voice)
                );
            }
        }
    }

    #[test]
    fn test_extended_catalog_needs_no_selector_change() {
        let mut entries = VoiceCatalog::playai().entries().to_vec();
        entries.push(LanguageEntry::new(
            "fr",
            "french",
            "French",
            "playai-tts-french",
            "Margot",
            &["Margot", "Luc"],
        ));
        let selector = Selector::new(VoiceCatalog::new(entries).unwrap());

        assert_eq!(
            selector.resolve(Some("fr"), Some("Luc")).unwrap(),
            target("playai-tts-french", "Luc")
        );
        let err = selector.resolve(Some("de"), None).unwrap_err();
        assert_eq!(err.to_string(), "lang must be 'en', 'ar' or 'fr'");
    }

    #[test]
    fn test_request_deserializes_lang_field() {
        let request: SynthesisRequest =
            serde_json::from_str(r#"{"text": "salam", "lang": "ar"}"#).unwrap();
        assert_eq!(request.language.as_deref(), Some("ar"));
        assert!(request.voice.is_none());
        assert_eq!(
            Selector::default().resolve_request(&request).unwrap().voice,
            "Ahmad-PlayAI"
        );
    }
}
