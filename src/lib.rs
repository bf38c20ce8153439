//! tgscribe - Telegram voice message transcription bot
//!
//! Receives voice messages, transcribes them locally with Whisper, and
//! replies with the text. Per-chat transcription/translation mode, chunked
//! replies, guaranteed scratch-file cleanup.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod bot;
pub mod chunk;
pub mod config;
pub mod defaults;
pub mod error;
pub mod mode;
pub mod pipeline;
pub mod scratch;
pub mod stt;
pub mod worker;

// Seams (trait + real + mock)
pub use bot::api::{Messenger, MockMessenger, TelegramMessenger};
pub use stt::transcriber::{MockTranscriber, Transcriber};

// Pipeline
pub use pipeline::{Outcome, Rejection, VoicePipeline, VoiceRequest};
pub use worker::{TranscriptionWorker, WorkerHandle};

// Mode state
pub use mode::{Mode, ModeRegistry};

// Error handling
pub use error::{Result, TgscribeError};

// Config
pub use config::Config;
