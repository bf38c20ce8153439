//! Single-slot transcription worker.
//!
//! One loaded model serves every chat, so all transcriptions are serialized
//! through one dedicated OS thread that owns the engine. Requests queue up
//! in arrival order and `await` their result without blocking the async
//! runtime; downloads and replies for other chats keep flowing while the
//! model is busy.

use crate::error::{Result, TgscribeError};
use crate::mode::Mode;
use crate::stt::transcriber::Transcriber;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

struct TranscriptionJob {
    path: PathBuf,
    mode: Mode,
    reply: oneshot::Sender<Result<String>>,
}

/// Handle for submitting transcription jobs to the worker thread.
///
/// Cloneable; the worker thread exits once every handle is dropped and the
/// queue drains.
#[derive(Clone)]
pub struct WorkerHandle {
    tx: crossbeam_channel::Sender<TranscriptionJob>,
}

impl WorkerHandle {
    /// Queue a file for transcription and wait for the text.
    ///
    /// Jobs are processed strictly in submission order, one at a time.
    pub async fn transcribe(&self, path: PathBuf, mode: Mode) -> Result<String> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(TranscriptionJob { path, mode, reply })
            .map_err(|_| TgscribeError::WorkerUnavailable)?;

        rx.await.map_err(|_| TgscribeError::WorkerUnavailable)?
    }
}

/// Spawns and owns the transcription worker thread.
pub struct TranscriptionWorker;

impl TranscriptionWorker {
    /// Spawn the worker thread owning `transcriber`.
    pub fn spawn(transcriber: Box<dyn Transcriber>) -> Result<WorkerHandle> {
        let (tx, rx) = crossbeam_channel::unbounded::<TranscriptionJob>();

        thread::Builder::new()
            .name("transcription-worker".to_string())
            .spawn(move || {
                info!(model = transcriber.model_name(), "transcription worker started");

                for job in rx.iter() {
                    let started = Instant::now();
                    let result = transcriber.transcribe(&job.path, job.mode);
                    debug!(
                        path = %job.path.display(),
                        mode = job.mode.token(),
                        elapsed_secs = started.elapsed().as_secs_f64(),
                        ok = result.is_ok(),
                        "transcription job finished"
                    );

                    if job.reply.send(result).is_err() {
                        warn!(path = %job.path.display(), "transcription requester went away");
                    }
                }

                info!("transcription worker stopped");
            })?;

        Ok(WorkerHandle { tx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stt::transcriber::MockTranscriber;

    #[tokio::test]
    async fn worker_round_trips_a_job() {
        let mock = MockTranscriber::new("test-model").with_response("hello world");
        let handle = TranscriptionWorker::spawn(Box::new(mock)).unwrap();

        let text = handle
            .transcribe(PathBuf::from("voice.oga"), Mode::Transcribe)
            .await
            .unwrap();

        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn worker_passes_mode_through() {
        let mock = MockTranscriber::new("test-model");
        let modes = mock.clone();
        let handle = TranscriptionWorker::spawn(Box::new(mock)).unwrap();

        handle
            .transcribe(PathBuf::from("a.oga"), Mode::Translate)
            .await
            .unwrap();

        assert_eq!(modes.seen_modes(), vec![Mode::Translate]);
    }

    #[tokio::test]
    async fn worker_propagates_transcriber_errors() {
        let mock = MockTranscriber::new("test-model").with_failure();
        let handle = TranscriptionWorker::spawn(Box::new(mock)).unwrap();

        let result = handle
            .transcribe(PathBuf::from("voice.oga"), Mode::Transcribe)
            .await;

        match result {
            Err(TgscribeError::Inference { .. }) => {}
            other => panic!("expected Inference error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn jobs_are_processed_in_submission_order() {
        let mock = MockTranscriber::new("test-model").with_response("ok");
        let modes = mock.clone();
        let handle = TranscriptionWorker::spawn(Box::new(mock)).unwrap();

        for mode in [Mode::Transcribe, Mode::Translate, Mode::Transcribe] {
            handle
                .transcribe(PathBuf::from("v.oga"), mode)
                .await
                .unwrap();
        }

        assert_eq!(
            modes.seen_modes(),
            vec![Mode::Transcribe, Mode::Translate, Mode::Transcribe]
        );
    }

    #[test]
    fn handle_is_clone_and_send() {
        fn assert_send<T: Send>() {}
        fn assert_clone<T: Clone>() {}

        assert_send::<WorkerHandle>();
        assert_clone::<WorkerHandle>();
    }
}
