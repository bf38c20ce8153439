use crate::error::{Result, TgscribeError};
use crate::mode::Mode;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Trait for speech-to-text transcription of downloaded voice files.
///
/// This trait allows swapping implementations (real Whisper vs mock).
/// The call is blocking and expensive; it runs on the dedicated worker
/// thread, never on the async runtime.
pub trait Transcriber: Send {
    /// Transcribe the audio file at `path` to text.
    ///
    /// # Arguments
    /// * `path` - Audio file in any container FFmpeg understands
    /// * `mode` - Verbatim transcription or translation to English
    ///
    /// # Returns
    /// Trimmed transcription text (may be empty for silence) or error
    fn transcribe(&self, path: &Path, mode: Mode) -> Result<String>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;

    /// Check if the transcriber is ready
    fn is_ready(&self) -> bool;
}

/// Mock transcriber for testing
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    model_name: String,
    response: String,
    should_fail: bool,
    seen_modes: Arc<Mutex<Vec<Mode>>>,
}

impl MockTranscriber {
    /// Create a new mock transcriber with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            response: "mock transcription".to_string(),
            should_fail: false,
            seen_modes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Modes passed to `transcribe`, in call order.
    pub fn seen_modes(&self) -> Vec<Mode> {
        self.seen_modes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&self, _path: &Path, mode: Mode) -> Result<String> {
        self.seen_modes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(mode);

        if self.should_fail {
            Err(TgscribeError::Inference {
                message: "mock transcription failure".to_string(),
            })
        } else {
            Ok(self.response.clone())
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}
