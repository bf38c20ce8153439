//! The messaging seam between the pipeline and Telegram.
//!
//! The pipeline only talks to this trait, so end-to-end behavior can be
//! tested with a mock and the teloxide surface stays in one place.

use crate::error::{Result, TgscribeError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, FileId, MessageId, ReplyParameters};

/// Outbound chat operations the pipeline needs.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a plain message to a chat.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Send a message quoting the message it responds to.
    async fn reply_text(&self, chat_id: i64, message_id: i32, text: &str) -> Result<()>;

    /// Show the "typing…" indicator in a chat.
    async fn signal_typing(&self, chat_id: i64) -> Result<()>;

    /// Download a voice payload to `dest`.
    async fn download_voice(&self, file_ref: &str, dest: &Path) -> Result<()>;
}

/// Telegram-backed messenger.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot.send_message(ChatId(chat_id), text).await?;
        Ok(())
    }

    async fn reply_text(&self, chat_id: i64, message_id: i32, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .reply_parameters(ReplyParameters::new(MessageId(message_id)))
            .await?;
        Ok(())
    }

    async fn signal_typing(&self, chat_id: i64) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat_id), ChatAction::Typing)
            .await?;
        Ok(())
    }

    async fn download_voice(&self, file_ref: &str, dest: &Path) -> Result<()> {
        let file = self.bot.get_file(FileId(file_ref.to_string())).await?;

        let mut dst =
            tokio::fs::File::create(dest)
                .await
                .map_err(|e| TgscribeError::Download {
                    message: format!("failed to create {}: {}", dest.display(), e),
                })?;

        self.bot
            .download_file(&file.path, &mut dst)
            .await
            .map_err(|e| TgscribeError::Download {
                message: e.to_string(),
            })?;

        Ok(())
    }
}

/// One message recorded by [`MockMessenger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Mock messenger for testing
///
/// Records every outbound call; downloads write a placeholder payload to
/// the destination path.
#[derive(Debug, Clone, Default)]
pub struct MockMessenger {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    downloads: Arc<Mutex<Vec<PathBuf>>>,
    typing_signals: Arc<Mutex<usize>>,
    fail_downloads: bool,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure every download to fail.
    pub fn with_download_failure(mut self) -> Self {
        self.fail_downloads = true;
        self
    }

    /// Texts sent so far, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|m| m.text.clone())
            .collect()
    }

    /// Full send records, in order.
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Paths passed to `download_voice`, in order.
    pub fn downloads(&self) -> Vec<PathBuf> {
        self.downloads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of typing indicators signaled.
    pub fn typing_signals(&self) -> usize {
        *self.typing_signals.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, chat_id: i64, text: &str) {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SentMessage {
                chat_id,
                text: text.to_string(),
            });
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.record(chat_id, text);
        Ok(())
    }

    async fn reply_text(&self, chat_id: i64, _message_id: i32, text: &str) -> Result<()> {
        self.record(chat_id, text);
        Ok(())
    }

    async fn signal_typing(&self, _chat_id: i64) -> Result<()> {
        *self.typing_signals.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }

    async fn download_voice(&self, _file_ref: &str, dest: &Path) -> Result<()> {
        if self.fail_downloads {
            return Err(TgscribeError::Download {
                message: "mock download failure".to_string(),
            });
        }

        self.downloads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(dest.to_path_buf());
        tokio::fs::write(dest, b"OggS mock voice payload").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn mock_records_sent_messages_in_order() {
        let mock = MockMessenger::new();

        mock.send_text(1, "first").await.unwrap();
        mock.reply_text(1, 7, "second").await.unwrap();

        assert_eq!(mock.sent_texts(), vec!["first", "second"]);
        assert_eq!(mock.sent_messages()[0].chat_id, 1);
    }

    #[tokio::test]
    async fn mock_download_writes_payload() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("voice.oga");
        let mock = MockMessenger::new();

        mock.download_voice("file-ref", &dest).await.unwrap();

        assert!(dest.exists());
        assert_eq!(mock.downloads(), vec![dest]);
    }

    #[tokio::test]
    async fn mock_download_failure_leaves_no_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("voice.oga");
        let mock = MockMessenger::new().with_download_failure();

        let result = mock.download_voice("file-ref", &dest).await;

        assert!(matches!(result, Err(TgscribeError::Download { .. })));
        assert!(!dest.exists());
        assert!(mock.downloads().is_empty());
    }

    #[tokio::test]
    async fn mock_counts_typing_signals() {
        let mock = MockMessenger::new();
        mock.signal_typing(5).await.unwrap();
        mock.signal_typing(5).await.unwrap();
        assert_eq!(mock.typing_signals(), 2);
    }
}
