use anyhow::Result;
use std::sync::Arc;
use teloxide::Bot;
use tgscribe::bot::AppContext;
use tgscribe::config::{self, Config};
use tgscribe::mode::ModeRegistry;
use tgscribe::pipeline::VoicePipeline;
use tgscribe::stt::whisper::{WhisperConfig, WhisperEngine};
use tgscribe::worker::TranscriptionWorker;
use tgscribe::{TelegramMessenger, Transcriber};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env_or_default()?;
    let token = config::bot_token()?;

    std::fs::create_dir_all(&config.storage.work_dir)?;

    info!(model = %config.stt.model_path.display(), "loading transcription model");
    let engine = WhisperEngine::new(WhisperConfig {
        model_path: config.stt.model_path.clone(),
        language: config.stt.language.clone(),
        threads: match config.stt.threads {
            0 => None,
            n => Some(n),
        },
    })?;
    info!(model = engine.model_name(), "transcription model loaded");

    let worker = TranscriptionWorker::spawn(Box::new(engine))?;

    let bot = Bot::new(token);
    let modes = Arc::new(ModeRegistry::new());
    let pipeline = VoicePipeline::new(
        TelegramMessenger::new(bot.clone()),
        worker,
        Arc::clone(&modes),
        config.storage.work_dir.clone(),
    );

    let ctx = Arc::new(AppContext { pipeline, modes });

    info!("starting Telegram dispatcher");
    tgscribe::bot::run(bot, ctx).await;
    info!("dispatcher stopped");

    Ok(())
}
