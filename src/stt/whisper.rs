//! Whisper-based speech-to-text transcription.
//!
//! This module provides a Whisper implementation of the Transcriber trait
//! using whisper-rs. The model is loaded once at startup and owned
//! exclusively by the transcription worker thread.
//!
//! # Feature Gate
//!
//! This module requires the `whisper` feature to be enabled and cmake to be
//! installed. Without it a stub is compiled that fails on use.

#[cfg(feature = "whisper")]
use crate::audio;
use crate::defaults;
use crate::error::{Result, TgscribeError};
use crate::mode::Mode;
#[cfg(feature = "whisper")]
use crate::scratch::ScratchFile;
use crate::stt::transcriber::Transcriber;
use std::path::{Path, PathBuf};

#[cfg(feature = "whisper")]
use std::sync::Once;
#[cfg(feature = "whisper")]
use whisper_rs::{
    install_logging_hooks, FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters,
};

#[cfg(feature = "whisper")]
static LOGGING_HOOKS_INSTALLED: Once = Once::new();

/// Configuration for the Whisper engine.
#[derive(Debug, Clone)]
pub struct WhisperConfig {
    /// Path to the Whisper model file
    pub model_path: PathBuf,
    /// Language code (e.g., "en", "de"), or "auto" to detect
    pub language: String,
    /// Number of threads for inference (None = auto-detect)
    pub threads: Option<usize>,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(defaults::DEFAULT_MODEL_PATH),
            language: defaults::DEFAULT_LANGUAGE.to_string(),
            threads: None,
        }
    }
}

/// Whisper-based transcriber implementation.
#[cfg(feature = "whisper")]
pub struct WhisperEngine {
    context: WhisperContext,
    config: WhisperConfig,
    model_name: String,
}

#[cfg(feature = "whisper")]
impl std::fmt::Debug for WhisperEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperEngine")
            .field("config", &self.config)
            .field("model_name", &self.model_name)
            .field("context", &"<WhisperContext>")
            .finish()
    }
}

/// Whisper-based transcriber placeholder (without whisper feature).
///
/// This is a stub implementation that returns errors when used.
/// Enable the `whisper` feature to use real transcription.
#[cfg(not(feature = "whisper"))]
#[derive(Debug)]
pub struct WhisperEngine {
    config: WhisperConfig,
    model_name: String,
}

fn model_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(feature = "whisper")]
impl WhisperEngine {
    /// Create a new Whisper engine, loading the model into memory.
    ///
    /// # Errors
    /// Returns `TgscribeError::ModelNotFound` if the model file doesn't exist
    /// Returns `TgscribeError::Inference` if model loading fails
    pub fn new(config: WhisperConfig) -> Result<Self> {
        // Install logging hooks to suppress whisper.cpp output (only once)
        LOGGING_HOOKS_INSTALLED.call_once(|| {
            install_logging_hooks();
        });

        if !config.model_path.exists() {
            return Err(TgscribeError::ModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }

        let model_name = model_name_from_path(&config.model_path);

        let context_params = WhisperContextParameters::default();
        let context = WhisperContext::new_with_params(
            config
                .model_path
                .to_str()
                .ok_or_else(|| TgscribeError::Inference {
                    message: "Invalid UTF-8 in model path".to_string(),
                })?,
            context_params,
        )
        .map_err(|e| TgscribeError::Inference {
            message: format!("Failed to load Whisper model: {}", e),
        })?;

        Ok(Self {
            context,
            config,
            model_name,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &WhisperConfig {
        &self.config
    }

    fn run_inference(&self, samples: &[i16], mode: Mode) -> Result<String> {
        // Whisper expects f32 samples normalized to [-1.0, 1.0]
        let audio_f32: Vec<f32> = samples.iter().map(|&s| s as f32 / 32768.0).collect();

        let mut state = self
            .context
            .create_state()
            .map_err(|e| TgscribeError::Inference {
                message: format!("Failed to create Whisper state: {}", e),
            })?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        if self.config.language == defaults::AUTO_LANGUAGE {
            params.set_language(None);
        } else {
            params.set_language(Some(&self.config.language));
        }

        params.set_translate(mode == Mode::Translate);

        if let Some(threads) = self.config.threads {
            params.set_n_threads(threads as i32);
        }

        // Disable printing to stdout/stderr
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, &audio_f32)
            .map_err(|e| TgscribeError::Inference {
                message: format!("Whisper inference failed: {}", e),
            })?;

        let mut transcription = String::new();
        for segment in state.as_iter() {
            transcription.push_str(&segment.to_string());
        }

        Ok(transcription.trim().to_string())
    }
}

#[cfg(feature = "whisper")]
impl Transcriber for WhisperEngine {
    fn transcribe(&self, path: &Path, mode: Mode) -> Result<String> {
        // Derived WAV lives next to the voice payload and is removed with it.
        let wav_path = path.with_extension("wav");
        let wav_guard = ScratchFile::new(wav_path.clone());

        audio::convert::to_wav(path, wav_guard.path())?;
        let samples = audio::wav::read_samples(wav_guard.path())?;

        self.run_inference(&samples, mode)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(not(feature = "whisper"))]
impl WhisperEngine {
    /// Create a new Whisper engine (stub implementation).
    pub fn new(config: WhisperConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(TgscribeError::ModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }

        let model_name = model_name_from_path(&config.model_path);
        Ok(Self { config, model_name })
    }

    /// Get the configuration
    pub fn config(&self) -> &WhisperConfig {
        &self.config
    }
}

#[cfg(not(feature = "whisper"))]
impl Transcriber for WhisperEngine {
    fn transcribe(&self, _path: &Path, _mode: Mode) -> Result<String> {
        Err(TgscribeError::Inference {
            message: concat!(
                "Whisper feature not enabled. This binary was built without speech recognition.\n",
                "To fix: cargo build --release (whisper is enabled by default)\n",
                "If build fails with cmake errors, install: sudo apt install cmake"
            )
            .to_string(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        false
    }
}
