use crate::defaults;
use crate::error::{Result, TgscribeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the Telegram bot token.
///
/// The token is deliberately never read from the config file.
pub const BOT_TOKEN_ENV: &str = "TGSCRIBE_BOT_TOKEN";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub stt: SttConfig,
    pub storage: StorageConfig,
}

/// Speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    /// Path to the Whisper model file
    pub model_path: PathBuf,
    /// Language code ("auto" = detect)
    pub language: String,
    /// Inference threads (0 = auto-detect)
    pub threads: usize,
}

/// Scratch storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for downloaded voice payloads
    pub work_dir: PathBuf,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(defaults::DEFAULT_MODEL_PATH),
            language: defaults::DEFAULT_LANGUAGE.to_string(),
            threads: 0,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            work_dir: std::env::temp_dir().join("tgscribe"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file doesn't exist
    ///
    /// Only a missing file falls back to defaults; invalid TOML is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(TgscribeError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - TGSCRIBE_MODEL_PATH → stt.model_path
    /// - TGSCRIBE_LANGUAGE → stt.language
    /// - TGSCRIBE_WORK_DIR → storage.work_dir
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("TGSCRIBE_MODEL_PATH") {
            if !path.is_empty() {
                self.stt.model_path = PathBuf::from(path);
            }
        }

        if let Ok(language) = std::env::var("TGSCRIBE_LANGUAGE") {
            if !language.is_empty() {
                self.stt.language = language;
            }
        }

        if let Ok(dir) = std::env::var("TGSCRIBE_WORK_DIR") {
            if !dir.is_empty() {
                self.storage.work_dir = PathBuf::from(dir);
            }
        }

        self
    }

    /// Resolve the config file path (TGSCRIBE_CONFIG or `tgscribe.toml`),
    /// load it, and apply environment overrides.
    pub fn from_env_or_default() -> Result<Self> {
        let path = std::env::var("TGSCRIBE_CONFIG").unwrap_or_else(|_| "tgscribe.toml".to_string());
        Ok(Self::load_or_default(Path::new(&path))?.with_env_overrides())
    }
}

/// Read the bot token from the environment.
pub fn bot_token() -> Result<String> {
    match std::env::var(BOT_TOKEN_ENV) {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => Err(TgscribeError::MissingEnv {
            name: BOT_TOKEN_ENV.to_string(),
        }),
    }
}
