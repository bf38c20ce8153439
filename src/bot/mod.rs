//! Telegram dispatcher wiring.

pub mod api;
pub mod commands;
pub mod handlers;

use crate::bot::api::TelegramMessenger;
use crate::bot::commands::Command;
use crate::mode::ModeRegistry;
use crate::pipeline::VoicePipeline;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;

/// Shared state handed to every update handler.
pub struct AppContext {
    pub pipeline: VoicePipeline<TelegramMessenger>,
    pub modes: Arc<ModeRegistry>,
}

/// Run the dispatcher until shutdown (ctrl-c).
///
/// Routing: commands first, then voice messages, then the refusal fallback.
pub async fn run(bot: Bot, ctx: Arc<AppContext>) {
    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.voice().is_some())
                .endpoint(handlers::handle_voice),
        )
        .endpoint(handlers::handle_other);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "unhandled error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
