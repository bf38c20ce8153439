//! Per-request voice processing pipeline.
//!
//! Drives one inbound voice message from arrival to a terminal state:
//! duration gate, download, transcription, chunked reply, cleanup. The
//! scratch file is removed on every exit path, including errors.

use crate::bot::api::Messenger;
use crate::chunk;
use crate::defaults::{
    AUDIO_TOO_LONG_MSG, MAX_VOICE_DURATION_SECS, SEGMENT_CHAR_LIMIT, TRANSCRIPTION_EMPTY_MSG,
};
use crate::error::Result;
use crate::mode::ModeRegistry;
use crate::scratch::{voice_path, ScratchFile};
use crate::worker::WorkerHandle;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One inbound voice message, reduced to what the pipeline needs.
#[derive(Debug, Clone)]
pub struct VoiceRequest {
    pub chat_id: i64,
    pub user_id: u64,
    pub message_id: i32,
    pub duration_secs: u32,
    /// Platform file reference for downloading the payload.
    pub file_ref: String,
}

/// Why a request terminated without a transcription reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Voice message exceeded the duration limit; nothing was downloaded.
    TooLong,
    /// The model produced no text.
    EmptyTranscription,
}

/// Terminal state of a successfully handled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Transcription delivered in `segments` reply messages.
    Completed { segments: usize },
    Rejected(Rejection),
}

/// The voice processing pipeline, shared by all chats.
pub struct VoicePipeline<M> {
    messenger: M,
    worker: WorkerHandle,
    modes: Arc<ModeRegistry>,
    work_dir: PathBuf,
}

impl<M: Messenger> VoicePipeline<M> {
    pub fn new(
        messenger: M,
        worker: WorkerHandle,
        modes: Arc<ModeRegistry>,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            messenger,
            worker,
            modes,
            work_dir,
        }
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Drive one request to a terminal state.
    ///
    /// Duration and empty-transcription rejections are handled here with
    /// their fixed reply texts. Download, transcription and send failures
    /// propagate to the caller; the scratch file is still removed.
    pub async fn handle(&self, request: &VoiceRequest) -> Result<Outcome> {
        let started = Instant::now();
        info!(
            chat_id = request.chat_id,
            message_id = request.message_id,
            duration_secs = request.duration_secs,
            "received voice message"
        );

        // Mode is resolved at arrival: a toggle issued while this request
        // is in flight affects only later requests.
        let mode = self.modes.get(request.chat_id);

        if request.duration_secs > MAX_VOICE_DURATION_SECS {
            self.messenger
                .reply_text(request.chat_id, request.message_id, AUDIO_TOO_LONG_MSG)
                .await?;
            info!(chat_id = request.chat_id, "rejected voice message: too long");
            return Ok(Outcome::Rejected(Rejection::TooLong));
        }

        let scratch = ScratchFile::new(voice_path(
            &self.work_dir,
            request.chat_id,
            request.user_id,
            request.message_id,
        ));

        // Best-effort: a failed typing indicator must not fail the request.
        if let Err(e) = self.messenger.signal_typing(request.chat_id).await {
            warn!(chat_id = request.chat_id, error = %e, "failed to signal typing");
        }

        self.messenger
            .download_voice(&request.file_ref, scratch.path())
            .await?;

        let text = self
            .worker
            .transcribe(scratch.path().to_path_buf(), mode)
            .await?;
        debug!(
            chat_id = request.chat_id,
            chars = text.chars().count(),
            "received transcription"
        );

        if text.is_empty() {
            self.messenger
                .reply_text(request.chat_id, request.message_id, TRANSCRIPTION_EMPTY_MSG)
                .await?;
            info!(
                chat_id = request.chat_id,
                elapsed_secs = started.elapsed().as_secs_f64(),
                "finished voice message: empty transcription"
            );
            return Ok(Outcome::Rejected(Rejection::EmptyTranscription));
        }

        let segments = chunk::segments(&text, SEGMENT_CHAR_LIMIT);
        let count = segments.len();
        for segment in segments {
            self.messenger
                .reply_text(request.chat_id, request.message_id, segment)
                .await?;
        }

        info!(
            chat_id = request.chat_id,
            segments = count,
            elapsed_secs = started.elapsed().as_secs_f64(),
            "finished voice message"
        );
        Ok(Outcome::Completed { segments: count })
    }
}
