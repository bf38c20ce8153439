//! End-to-end pipeline tests with mock messenger and transcriber.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};
use tgscribe::defaults::{AUDIO_TOO_LONG_MSG, TRANSCRIPTION_EMPTY_MSG};
use tgscribe::scratch::voice_path;
use tgscribe::{
    Mode, ModeRegistry, MockMessenger, MockTranscriber, Outcome, Rejection, TgscribeError,
    TranscriptionWorker, VoicePipeline, VoiceRequest,
};

struct Harness {
    pipeline: VoicePipeline<MockMessenger>,
    messenger: MockMessenger,
    transcriber: MockTranscriber,
    modes: Arc<ModeRegistry>,
    work_dir: PathBuf,
    // Held for the lifetime of the test so the directory isn't removed early.
    _dir: TempDir,
}

fn harness(transcriber: MockTranscriber, messenger: MockMessenger) -> Harness {
    let dir = tempdir().unwrap();
    let work_dir = dir.path().to_path_buf();
    let modes = Arc::new(ModeRegistry::new());
    let worker = TranscriptionWorker::spawn(Box::new(transcriber.clone())).unwrap();
    let pipeline = VoicePipeline::new(
        messenger.clone(),
        worker,
        Arc::clone(&modes),
        work_dir.clone(),
    );

    Harness {
        pipeline,
        messenger,
        transcriber,
        modes,
        work_dir,
        _dir: dir,
    }
}

fn request(duration_secs: u32) -> VoiceRequest {
    VoiceRequest {
        chat_id: 100,
        user_id: 200,
        message_id: 300,
        duration_secs,
        file_ref: "file-ref".to_string(),
    }
}

#[tokio::test]
async fn accepted_voice_message_is_transcribed_and_cleaned_up() {
    let h = harness(
        MockTranscriber::new("mock").with_response("hello world"),
        MockMessenger::new(),
    );

    let outcome = h.pipeline.handle(&request(1795)).await.unwrap();

    assert_eq!(outcome, Outcome::Completed { segments: 1 });
    assert_eq!(h.messenger.sent_texts(), vec!["hello world"]);
    assert_eq!(h.messenger.typing_signals(), 1);

    // Scratch file is gone after the request completes.
    let path = voice_path(&h.work_dir, 100, 200, 300);
    assert!(!path.exists());
}

#[tokio::test]
async fn duration_at_the_limit_is_accepted() {
    let h = harness(
        MockTranscriber::new("mock").with_response("boundary"),
        MockMessenger::new(),
    );

    let outcome = h.pipeline.handle(&request(1800)).await.unwrap();

    assert_eq!(outcome, Outcome::Completed { segments: 1 });
    assert_eq!(h.messenger.downloads().len(), 1);
}

#[tokio::test]
async fn too_long_voice_message_is_rejected_before_download() {
    let h = harness(MockTranscriber::new("mock"), MockMessenger::new());

    let outcome = h.pipeline.handle(&request(1801)).await.unwrap();

    assert_eq!(outcome, Outcome::Rejected(Rejection::TooLong));
    assert_eq!(h.messenger.sent_texts(), vec![AUDIO_TOO_LONG_MSG]);
    // No download, no transcription, no file.
    assert!(h.messenger.downloads().is_empty());
    assert!(h.transcriber.seen_modes().is_empty());
    assert!(!voice_path(&h.work_dir, 100, 200, 300).exists());
}

#[tokio::test]
async fn long_transcription_is_chunked_in_order() {
    let text = "x".repeat(9000);
    let h = harness(
        MockTranscriber::new("mock").with_response(&text),
        MockMessenger::new(),
    );

    let outcome = h.pipeline.handle(&request(60)).await.unwrap();

    assert_eq!(outcome, Outcome::Completed { segments: 3 });
    let sent = h.messenger.sent_texts();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].chars().count(), 4096);
    assert_eq!(sent[1].chars().count(), 4096);
    assert_eq!(sent[2].chars().count(), 808);
    assert_eq!(sent.concat(), text);
}

#[tokio::test]
async fn empty_transcription_sends_fixed_apology_only() {
    let h = harness(
        MockTranscriber::new("mock").with_response(""),
        MockMessenger::new(),
    );

    let outcome = h.pipeline.handle(&request(30)).await.unwrap();

    assert_eq!(outcome, Outcome::Rejected(Rejection::EmptyTranscription));
    assert_eq!(h.messenger.sent_texts(), vec![TRANSCRIPTION_EMPTY_MSG]);
    assert!(!voice_path(&h.work_dir, 100, 200, 300).exists());
}

#[tokio::test]
async fn translate_mode_is_passed_to_the_engine() {
    let h = harness(
        MockTranscriber::new("mock").with_response("english text"),
        MockMessenger::new(),
    );

    // Equivalent of /set_translate_to_english for this chat.
    h.modes.set(100, Mode::Translate);
    h.pipeline.handle(&request(30)).await.unwrap();

    assert_eq!(h.transcriber.seen_modes(), vec![Mode::Translate]);
    assert_eq!(h.transcriber.seen_modes()[0].token(), "translate");
}

#[tokio::test]
async fn mode_toggle_only_affects_the_issuing_chat() {
    let h = harness(
        MockTranscriber::new("mock").with_response("text"),
        MockMessenger::new(),
    );

    h.modes.set(999, Mode::Translate);
    h.pipeline.handle(&request(30)).await.unwrap(); // chat 100

    assert_eq!(h.transcriber.seen_modes(), vec![Mode::Transcribe]);
}

#[tokio::test]
async fn download_failure_propagates_and_leaves_no_file() {
    let h = harness(
        MockTranscriber::new("mock"),
        MockMessenger::new().with_download_failure(),
    );

    let result = h.pipeline.handle(&request(30)).await;

    assert!(matches!(result, Err(TgscribeError::Download { .. })));
    assert!(h.messenger.sent_texts().is_empty());
    assert!(h.transcriber.seen_modes().is_empty());
    assert!(!voice_path(&h.work_dir, 100, 200, 300).exists());
}

#[tokio::test]
async fn transcription_failure_propagates_and_cleans_up() {
    let h = harness(
        MockTranscriber::new("mock").with_failure(),
        MockMessenger::new(),
    );

    let result = h.pipeline.handle(&request(30)).await;

    assert!(matches!(result, Err(TgscribeError::Inference { .. })));
    // The payload was downloaded but removed again on the failure path.
    assert_eq!(h.messenger.downloads().len(), 1);
    assert!(!voice_path(&h.work_dir, 100, 200, 300).exists());
}

#[tokio::test]
async fn concurrent_requests_use_distinct_files() {
    let h = harness(
        MockTranscriber::new("mock").with_response("reply"),
        MockMessenger::new(),
    );

    let first = VoiceRequest {
        chat_id: 1,
        user_id: 10,
        message_id: 100,
        duration_secs: 5,
        file_ref: "a".to_string(),
    };
    let second = VoiceRequest {
        chat_id: 2,
        user_id: 20,
        message_id: 200,
        duration_secs: 5,
        file_ref: "b".to_string(),
    };

    let (r1, r2) = tokio::join!(h.pipeline.handle(&first), h.pipeline.handle(&second));
    assert_eq!(r1.unwrap(), Outcome::Completed { segments: 1 });
    assert_eq!(r2.unwrap(), Outcome::Completed { segments: 1 });

    let downloads = h.messenger.downloads();
    assert_eq!(downloads.len(), 2);
    assert_ne!(downloads[0], downloads[1]);
}
