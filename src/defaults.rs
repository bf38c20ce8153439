//! Default constants and fixed reply texts for tgscribe.
//!
//! This module provides shared constants used across different configuration
//! types and the fixed user-facing messages the bot sends, to ensure
//! consistency and eliminate duplication.

/// Maximum accepted voice message duration in seconds.
///
/// Messages longer than 30 minutes are rejected before download. The bound
/// is inclusive: a recording of exactly 1800 seconds is still accepted.
pub const MAX_VOICE_DURATION_SECS: u32 = 30 * 60;

/// Maximum length of a single outbound Telegram message, in characters.
///
/// Longer transcriptions are split into consecutive messages of at most
/// this many characters each.
pub const SEGMENT_CHAR_LIMIT: usize = 4096;

/// Audio sample rate expected by the transcription model, in Hz.
///
/// 16kHz mono is the standard input format for Whisper.
pub const SAMPLE_RATE: u32 = 16000;

/// Default path to the Whisper model file.
pub const DEFAULT_MODEL_PATH: &str = "models/ggml-large-v3.bin";

/// Default language code for transcription.
///
/// "auto" lets Whisper detect the spoken language automatically.
pub const DEFAULT_LANGUAGE: &str = "auto";

/// Language value that triggers automatic language detection.
pub const AUTO_LANGUAGE: &str = "auto";

/// File extension used for downloaded voice payloads (OGG/Opus container).
pub const VOICE_EXTENSION: &str = "oga";

/// Greeting sent in response to /start.
pub const START_MSG: &str = "I'm a bot that does transcription of your voice messages in (almost) \
     any language using OpenAI Whisper. Try me by sending a voice message to this chat!";

/// Rejection sent when a voice message exceeds the duration limit.
pub const AUDIO_TOO_LONG_MSG: &str =
    "Sorry, your audio is too long! I currently can transcribe only 30min recordings 🐣";

/// Refusal sent for any non-voice, non-command message.
pub const NON_VOICE_MSG: &str = "I can only transcribe the audio messages that you send here! \
     Please don't send me any other content, or I will ignore it.\n\n\
     I don't mean to be rude, I'm just a 🤖! Here is a bouquet of 🌹 for you: 🌹🌹🌹.";

/// Apology sent when the model produced no text at all.
pub const TRANSCRIPTION_EMPTY_MSG: &str =
    "Oh, shoot! I couldn't transcribe what you said this time. Can you try again? Please-e? 👀";

/// Acknowledgment for /set_transcribe_given_language.
pub const MODE_SET_TRANSCRIBE_MSG: &str =
    "I will now transcribe your messages in the language they are spoken! 🔣";

/// Acknowledgment for /set_translate_to_english.
pub const MODE_SET_TRANSLATE_MSG: &str = "I will now transcribe everything in English! 💂";

/// Generic failure message for download or transcription errors.
///
/// The underlying error is logged for the operator; the user only sees this.
pub const PROCESSING_FAILED_MSG: &str =
    "Something went wrong while processing your voice message. Can you try again a bit later? 🙏";
