//! WAV file reading for transcription input.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, TgscribeError};
use std::path::Path;

/// Read a WAV file into 16-bit PCM samples at 16kHz mono.
///
/// The FFmpeg step already emits 16kHz mono, but arbitrary WAV input is
/// handled anyway: stereo is downmixed and other rates are resampled.
pub fn read_samples(path: &Path) -> Result<Vec<i16>> {
    let mut reader = hound::WavReader::open(path).map_err(|e| TgscribeError::AudioDecode {
        message: format!("Failed to parse WAV file: {}", e),
    })?;

    let spec = reader.spec();
    let source_rate = spec.sample_rate;
    let source_channels = spec.channels;

    let raw_samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| TgscribeError::AudioDecode {
            message: format!("Failed to read WAV samples: {}", e),
        })?;

    // Convert to mono if stereo
    let mono_samples = if source_channels == 2 {
        raw_samples
            .chunks_exact(2)
            .map(|chunk| {
                let left = chunk[0] as i32;
                let right = chunk[1] as i32;
                ((left + right) / 2) as i16
            })
            .collect()
    } else {
        raw_samples
    };

    // Resample to 16kHz if needed
    if source_rate != SAMPLE_RATE {
        Ok(resample(&mono_samples, source_rate, SAMPLE_RATE))
    } else {
        Ok(mono_samples)
    }
}

/// Simple linear interpolation resampling.
fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;
    let last = samples.len() - 1;

    (0..output_len)
        .map(|i| {
            let src_pos = i as f64 * ratio;
            let idx = (src_pos as usize).min(last);
            let next = (idx + 1).min(last);
            let frac = src_pos - idx as f64;

            let a = samples[idx] as f64;
            let b = samples[next] as f64;
            (a + (b - a) * frac) as i16
        })
        .collect()
}
