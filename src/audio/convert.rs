//! Container conversion via FFmpeg.
//!
//! Telegram delivers voice messages as OGG/Opus. Whisper wants 16kHz mono
//! PCM, so each payload is converted to WAV with the system FFmpeg before
//! inference. FFmpeg is resolved from PATH.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, TgscribeError};
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::Path;

/// Convert an audio file to 16kHz mono WAV at `dst`.
///
/// Any existing file at `dst` is overwritten.
pub fn to_wav(src: &Path, dst: &Path) -> Result<()> {
    let sample_rate = SAMPLE_RATE.to_string();

    let status = FfmpegCommand::new()
        .input(src.to_string_lossy())
        .args(["-ar", &sample_rate, "-ac", "1"])
        .overwrite()
        .output(dst.to_string_lossy())
        .spawn()
        .map_err(|e| TgscribeError::AudioConversion {
            message: format!("failed to spawn ffmpeg: {}", e),
        })?
        .wait()
        .map_err(|e| TgscribeError::AudioConversion {
            message: format!("failed to wait for ffmpeg: {}", e),
        })?;

    if !status.success() {
        return Err(TgscribeError::AudioConversion {
            message: format!("ffmpeg exited with {}", status),
        });
    }

    Ok(())
}
