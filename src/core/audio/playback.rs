//! Hand-off point for decoded audio.
//!
//! Host audio output lives outside this crate. Anything that can accept a
//! mono sample buffer at a given rate implements [`PlaybackAdapter`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use super::wav::AudioBuffer;

/// Errors raised by a playback adapter.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("Playback I/O error: {0}")]
    Io(String),

    #[error("Failed to encode audio: {0}")]
    Encode(String),

    #[error("Playback rejected: {0}")]
    Rejected(String),
}

/// Consumer of decoded audio.
#[async_trait]
pub trait PlaybackAdapter: Send + Sync {
    /// Play (or store) `audio`. Ownership moves to the adapter.
    async fn play(&self, audio: AudioBuffer) -> Result<(), PlaybackError>;
}

/// Writes each buffer to a 16-bit PCM WAV file, replacing previous content.
#[derive(Debug, Clone)]
pub struct WavFileSink {
    path: PathBuf,
}

impl WavFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PlaybackAdapter for WavFileSink {
    async fn play(&self, audio: AudioBuffer) -> Result<(), PlaybackError> {
        let path = self.path.clone();
        let samples = audio.samples.len();
        let duration = audio.duration();

        tokio::task::spawn_blocking(move || write_wav(&path, &audio))
            .await
            .map_err(|e| PlaybackError::Io(format!("WAV writer task failed: {e}")))??;

        info!(
            path = %self.path.display(),
            samples = samples,
            duration_ms = duration.as_millis() as u64,
            "Wrote audio file"
        );
        Ok(())
    }
}

fn write_wav(path: &Path, audio: &AudioBuffer) -> Result<(), PlaybackError> {
    let spec = hound::WavSpec {
        channels: audio.channel_count.max(1),
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| match e {
        hound::Error::IoError(io) => PlaybackError::Io(io.to_string()),
        other => PlaybackError::Encode(other.to_string()),
    })?;
    for &sample in &audio.samples {
        writer
            .write_sample(to_i16(sample))
            .map_err(|e| PlaybackError::Encode(e.to_string()))?;
    }
    writer
        .finalize()
        .map_err(|e| PlaybackError::Encode(e.to_string()))
}

/// Inverse of the decoder's `s / 32768.0` scaling.
fn to_i16(sample: f32) -> i16 {
    (sample * 32768.0)
        .round()
        .clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
}
