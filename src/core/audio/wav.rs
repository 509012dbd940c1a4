//! RIFF/WAV to PCM float decoding.
//!
//! The decoder reads the fixed header fields at their canonical offsets,
//! walks the chunk list from offset 12 until it finds `data`, then converts
//! 16-bit little-endian samples to `f32` in `[-1.0, 1.0)`. Multi-channel
//! input is reduced to its first (left) channel, so the output is always
//! mono.

use std::time::Duration;

use tracing::{debug, warn};

/// Offset of the channel count in a canonical `fmt ` chunk.
const CHANNELS_OFFSET: usize = 22;
/// Offset of the sample rate in a canonical `fmt ` chunk.
const SAMPLE_RATE_OFFSET: usize = 24;
/// First chunk header after `RIFF <size> WAVE`.
const FIRST_CHUNK_OFFSET: usize = 12;
/// Bytes needed to read every fixed header field.
pub const MIN_HEADER_LEN: usize = SAMPLE_RATE_OFFSET + 4;

const BYTES_PER_SAMPLE: usize = 2;

/// Errors raised while decoding a WAV payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("WAV payload too short: {0} bytes, need at least {min}", min = MIN_HEADER_LEN)]
    TooShort(usize),

    #[error("Invalid WAV header: {0}")]
    InvalidHeader(String),

    /// The chunk list ended without a `data` chunk.
    #[error("No data chunk found in WAV payload")]
    NoDataChunk,

    #[error("Truncated WAV data: {0}")]
    Truncated(String),
}

/// Decoded mono audio.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Samples in `[-1.0, 1.0)`
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channel_count: u16,
}

impl AudioBuffer {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length at the buffer's sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 || self.channel_count == 0 {
            return Duration::ZERO;
        }
        let frames = self.samples.len() as f64 / f64::from(self.channel_count);
        Duration::from_secs_f64(frames / f64::from(self.sample_rate))
    }
}

/// Header facts gathered before sample conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavLayout {
    pub channel_count: u16,
    pub sample_rate: u32,
    /// Offset of the first sample byte
    pub data_offset: usize,
    /// Size declared by the `data` chunk header
    pub declared_len: usize,
    /// Bytes actually present after `data_offset`, capped at `declared_len`
    pub available_len: usize,
}

/// Stateless WAV/PCM decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavPcmDecoder;

impl WavPcmDecoder {
    /// Validate the header and locate the sample data.
    pub fn inspect(bytes: &[u8]) -> Result<WavLayout, DecodeError> {
        if bytes.len() < MIN_HEADER_LEN {
            return Err(DecodeError::TooShort(bytes.len()));
        }
        if &bytes[0..4] != b"RIFF" {
            return Err(DecodeError::InvalidHeader("missing RIFF magic".to_string()));
        }
        if &bytes[8..12] != b"WAVE" {
            return Err(DecodeError::InvalidHeader("missing WAVE magic".to_string()));
        }

        // Only the low byte of the 16-bit field is read.
        let channel_count = u16::from(bytes[CHANNELS_OFFSET]);
        if channel_count == 0 {
            return Err(DecodeError::InvalidHeader("channel count is zero".to_string()));
        }

        let sample_rate = read_u32_le(bytes, SAMPLE_RATE_OFFSET).unwrap_or(0);
        if sample_rate == 0 {
            return Err(DecodeError::InvalidHeader("sample rate is zero".to_string()));
        }

        let (data_offset, declared_len) = find_data_chunk(bytes)?;
        let available_len = declared_len.min(bytes.len() - data_offset);

        Ok(WavLayout {
            channel_count,
            sample_rate,
            data_offset,
            declared_len,
            available_len,
        })
    }

    /// Decode a complete WAV payload into mono samples.
    ///
    /// ```rust
    /// use cognitive_tts::core::audio::WavPcmDecoder;
    ///
    /// let mut wav = Vec::new();
    /// wav.extend_from_slice(b"RIFF");
    /// wav.extend_from_slice(&40u32.to_le_bytes());
    /// wav.extend_from_slice(b"WAVEfmt ");
    /// wav.extend_from_slice(&16u32.to_le_bytes());
    /// wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    /// wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    /// wav.extend_from_slice(&16000u32.to_le_bytes());
    /// wav.extend_from_slice(&32000u32.to_le_bytes());
    /// wav.extend_from_slice(&2u16.to_le_bytes());
    /// wav.extend_from_slice(&16u16.to_le_bytes());
    /// wav.extend_from_slice(b"data");
    /// wav.extend_from_slice(&4u32.to_le_bytes());
    /// wav.extend_from_slice(&16384i16.to_le_bytes());
    /// wav.extend_from_slice(&(-32768i16).to_le_bytes());
    ///
    /// let audio = WavPcmDecoder::decode(&wav).unwrap();
    /// assert_eq!(audio.samples, vec![0.5, -1.0]);
    /// assert_eq!(audio.sample_rate, 16000);
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<AudioBuffer, DecodeError> {
        let layout = Self::inspect(bytes)?;
        let frame_len = BYTES_PER_SAMPLE * usize::from(layout.channel_count);

        if layout.available_len < layout.declared_len {
            if layout.available_len < frame_len {
                return Err(DecodeError::Truncated(format!(
                    "data chunk declares {} bytes but only {} are present",
                    layout.declared_len, layout.available_len
                )));
            }
            warn!(
                declared = layout.declared_len,
                available = layout.available_len,
                "WAV data chunk shorter than declared, decoding available frames"
            );
        }

        let data = &bytes[layout.data_offset..layout.data_offset + layout.available_len];
        let samples: Vec<f32> = data
            .chunks_exact(frame_len)
            .map(|frame| i16::from_le_bytes([frame[0], frame[1]]) as f32 / 32768.0)
            .collect();

        debug!(
            samples = samples.len(),
            sample_rate = layout.sample_rate,
            source_channels = layout.channel_count,
            "Decoded WAV payload"
        );

        Ok(AudioBuffer {
            samples,
            sample_rate: layout.sample_rate,
            channel_count: 1,
        })
    }
}

fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let raw = bytes.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Walk `id(4) size(4) payload` chunks until `data`.
fn find_data_chunk(bytes: &[u8]) -> Result<(usize, usize), DecodeError> {
    let mut offset = FIRST_CHUNK_OFFSET;
    while let Some(size) = offset
        .checked_add(4)
        .and_then(|size_offset| read_u32_le(bytes, size_offset))
    {
        let id = &bytes[offset..offset + 4];
        let size = size as usize;
        if id == b"data" {
            return Ok((offset + 8, size));
        }
        offset = match offset.checked_add(8).and_then(|o| o.checked_add(size)) {
            Some(next) => next,
            None => break,
        };
    }
    Err(DecodeError::NoDataChunk)
}
