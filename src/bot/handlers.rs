//! Update handlers: commands, voice messages, and the fallback.

use crate::bot::api::Messenger;
use crate::bot::commands::Command;
use crate::bot::AppContext;
use crate::defaults::{
    MODE_SET_TRANSCRIBE_MSG, MODE_SET_TRANSLATE_MSG, NON_VOICE_MSG, PROCESSING_FAILED_MSG,
    START_MSG,
};
use crate::error::Result;
use crate::mode::Mode;
use crate::pipeline::VoiceRequest;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, warn};

/// Handle an explicit bot command.
pub async fn handle_command(msg: Message, cmd: Command, ctx: Arc<AppContext>) -> Result<()> {
    let chat_id = msg.chat.id.0;
    let messenger = ctx.pipeline.messenger();

    match cmd {
        Command::Start => {
            messenger.send_text(chat_id, START_MSG).await?;
        }
        Command::SetTranscribeGivenLanguage => {
            ctx.modes.set(chat_id, Mode::Transcribe);
            messenger.send_text(chat_id, MODE_SET_TRANSCRIBE_MSG).await?;
        }
        Command::SetTranslateToEnglish => {
            ctx.modes.set(chat_id, Mode::Translate);
            messenger.send_text(chat_id, MODE_SET_TRANSLATE_MSG).await?;
        }
    }

    Ok(())
}

/// Handle an inbound voice message by running the pipeline.
///
/// Pipeline errors are terminal for the request: they are logged for the
/// operator and answered with a fixed generic failure message.
pub async fn handle_voice(msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    let Some(voice) = msg.voice() else {
        // The dispatcher only routes voice messages here.
        return Ok(());
    };

    let request = VoiceRequest {
        chat_id: msg.chat.id.0,
        // Anonymous senders (channels) have no user; 0 keeps paths unique
        // per (chat, message) in that case.
        user_id: msg.from().map(|user| user.id.0).unwrap_or(0),
        message_id: msg.id.0,
        duration_secs: voice.duration.seconds(),
        file_ref: voice.file.id.0.clone(),
    };

    match ctx.pipeline.handle(&request).await {
        Ok(outcome) => {
            debug!(chat_id = request.chat_id, ?outcome, "voice request done");
        }
        Err(e) => {
            error!(
                chat_id = request.chat_id,
                message_id = request.message_id,
                error = %e,
                "voice request failed"
            );
            let messenger = ctx.pipeline.messenger();
            if let Err(send_err) = messenger
                .reply_text(request.chat_id, request.message_id, PROCESSING_FAILED_MSG)
                .await
            {
                warn!(chat_id = request.chat_id, error = %send_err, "failed to report failure to chat");
            }
        }
    }

    Ok(())
}

/// Politely refuse anything that is neither a command nor a voice message.
pub async fn handle_other(msg: Message, ctx: Arc<AppContext>) -> Result<()> {
    ctx.pipeline
        .messenger()
        .send_text(msg.chat.id.0, NON_VOICE_MSG)
        .await?;
    Ok(())
}
