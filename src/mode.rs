//! Transcription mode selection, tracked per chat.
//!
//! Every chat independently chooses between verbatim transcription and
//! translation to English. The mode is read once when a voice message
//! arrives, so toggling it never changes the behavior of a request that is
//! already in flight.

use std::collections::HashMap;
use std::sync::Mutex;

/// Transcription behavior selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Transcribe in the language that was spoken.
    #[default]
    Transcribe,
    /// Render the transcription in English.
    Translate,
}

impl Mode {
    /// The task token understood by the Whisper model.
    pub fn token(self) -> &'static str {
        match self {
            Mode::Transcribe => "transcribe",
            Mode::Translate => "translate",
        }
    }
}

/// Per-chat mode store.
///
/// Chats that never issued a mode command use [`Mode::default`]. Nothing is
/// persisted: every chat is back to the default after a restart.
#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: Mutex<HashMap<i64, Mode>>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode for a chat.
    pub fn get(&self, chat_id: i64) -> Mode {
        let modes = self.modes.lock().unwrap_or_else(|e| e.into_inner());
        modes.get(&chat_id).copied().unwrap_or_default()
    }

    /// Overwrite the mode for a chat.
    pub fn set(&self, chat_id: i64, mode: Mode) {
        let mut modes = self.modes.lock().unwrap_or_else(|e| e.into_inner());
        modes.insert(chat_id, mode);
    }
}
