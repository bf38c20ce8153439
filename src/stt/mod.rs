//! Speech-to-text engine and its call contract.

pub mod transcriber;
pub mod whisper;
