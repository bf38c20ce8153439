//! Error types for tgscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TgscribeError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Missing required environment variable {name}")]
    MissingEnv { name: String },

    // Audio errors
    #[error("Audio conversion failed: {message}")]
    AudioConversion { message: String },

    #[error("Audio decode failed: {message}")]
    AudioDecode { message: String },

    // Transcription errors
    #[error("Transcription model not found at {path}")]
    ModelNotFound { path: String },

    #[error("Transcription inference failed: {message}")]
    Inference { message: String },

    #[error("Transcription worker is not running")]
    WorkerUnavailable,

    // Telegram errors
    #[error("Voice download failed: {message}")]
    Download { message: String },

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, TgscribeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_model_not_found_display() {
        let error = TgscribeError::ModelNotFound {
            path: "/models/ggml-large-v3.bin".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription model not found at /models/ggml-large-v3.bin"
        );
    }

    #[test]
    fn test_inference_display() {
        let error = TgscribeError::Inference {
            message: "out of memory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription inference failed: out of memory"
        );
    }

    #[test]
    fn test_download_display() {
        let error = TgscribeError::Download {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Voice download failed: connection reset");
    }

    #[test]
    fn test_worker_unavailable_display() {
        let error = TgscribeError::WorkerUnavailable;
        assert_eq!(error.to_string(), "Transcription worker is not running");
    }

    #[test]
    fn test_missing_env_display() {
        let error = TgscribeError::MissingEnv {
            name: "TGSCRIBE_BOT_TOKEN".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing required environment variable TGSCRIBE_BOT_TOKEN"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: TgscribeError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: TgscribeError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<TgscribeError>();
        assert_sync::<TgscribeError>();
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
