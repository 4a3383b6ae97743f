//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.message }));
        (self.status, body).into_response()
    }
}

impl From<playtts_core::Error> for ApiError {
    fn from(err: playtts_core::Error) -> Self {
        if err.is_validation() {
            return ApiError::bad_request(err.to_string());
        }
        match &err {
            playtts_core::Error::SynthesisFailure(cause) => {
                ApiError::internal(format!("TTS generation failed: {}", cause))
            }
            _ => ApiError::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playtts_core::Error;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let err = ApiError::from(Error::InvalidLanguage {
            allowed: vec!["en".to_string(), "ar".to_string()],
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "lang must be 'en' or 'ar'");
    }

    #[test]
    fn test_invalid_voice_is_bad_request() {
        let err = ApiError::from(Error::InvalidVoice {
            name: "English".to_string(),
            voices: vec!["Arista-PlayAI".to_string()],
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "English voice not found. Use one of: ['Arista-PlayAI']"
        );
    }

    #[test]
    fn test_io_error_is_internal() {
        let err = ApiError::from(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "scratch dir not writable",
        )));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "IO error: scratch dir not writable");
    }

    #[test]
    fn test_synthesis_failure_embeds_cause() {
        let err = ApiError::from(Error::SynthesisFailure("provider returned 401".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "TTS generation failed: provider returned 401");
    }
}
