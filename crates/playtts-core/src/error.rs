//! Error types for the playtts pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("lang must be {}", quoted_choices(.allowed))]
    InvalidLanguage { allowed: Vec<String> },

    #[error("{name} voice not found. Use one of: {}", bracketed(.voices))]
    InvalidVoice { name: String, voices: Vec<String> },

    #[error("{0}")]
    SynthesisFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl Error {
    /// True for failures caused by the caller's input rather than the service.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidLanguage { .. } | Error::InvalidVoice { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn quoted_choices(codes: &[String]) -> String {
    let quoted: Vec<String> = codes.iter().map(|c| format!("'{}'", c)).collect();
    match quoted.split_last() {
        None => "one of no supported languages".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

fn bracketed(voices: &[String]) -> String {
    let quoted: Vec<String> = voices.iter().map(|v| format!("'{}'", v)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_language_message() {
        let err = Error::InvalidLanguage {
            allowed: vec!["en".to_string(), "ar".to_string()],
        };
        assert_eq!(err.to_string(), "lang must be 'en' or 'ar'");
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_voice_message() {
        let err = Error::InvalidVoice {
            name: "Arabic".to_string(),
            voices: vec!["Ahmad-PlayAI".to_string(), "Amira-PlayAI".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Arabic voice not found. Use one of: ['Ahmad-PlayAI', 'Amira-PlayAI']"
        );
    }

    #[test]
    fn test_synthesis_failure_is_not_validation() {
        let err = Error::SynthesisFailure("provider returned 503".to_string());
        assert_eq!(err.to_string(), "provider returned 503");
        assert!(!err.is_validation());
    }
}
