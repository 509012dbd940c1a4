//! Audio Test Fixtures
//!
//! Programmatically generated WAV payloads shaped like what the synthesis
//! service returns. Everything is 16-bit signed PCM; encoding goes through
//! `hound` so the decoder under test is checked against an independent writer.

use std::f32::consts::PI;
use std::io::Cursor;

/// Sample rate of the `riff-24khz-16bit-mono-pcm` format
pub const SAMPLE_RATE: u32 = 24000;

/// One second of mono audio at [`SAMPLE_RATE`]
pub const SECOND: usize = SAMPLE_RATE as usize;

/// Generate a sine wave tone at [`SAMPLE_RATE`]
pub fn generate_sine_wave(duration_samples: usize, frequency: f32, amplitude: f32) -> Vec<i16> {
    let max_amplitude = amplitude * i16::MAX as f32;
    let angular_freq = 2.0 * PI * frequency / SAMPLE_RATE as f32;

    (0..duration_samples)
        .map(|i| ((angular_freq * i as f32).sin() * max_amplitude) as i16)
        .collect()
}

/// Encode interleaved samples as a canonical 44-byte-header WAV file
pub fn encode_wav(samples: &[i16], channels: u16, sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("wav writer");
        for &sample in samples {
            writer.write_sample(sample).expect("write sample");
        }
        writer.finalize().expect("finalize wav");
    }
    cursor.into_inner()
}

/// Mono WAV at [`SAMPLE_RATE`]
pub fn mono_wav(samples: &[i16]) -> Vec<u8> {
    encode_wav(samples, 1, SAMPLE_RATE)
}

/// Stereo WAV built from separate channels, interleaved left first
pub fn stereo_wav(left: &[i16], right: &[i16], sample_rate: u32) -> Vec<u8> {
    assert_eq!(left.len(), right.len(), "channel lengths differ");
    let interleaved: Vec<i16> = left
        .iter()
        .zip(right)
        .flat_map(|(&l, &r)| [l, r])
        .collect();
    encode_wav(&interleaved, 2, sample_rate)
}

/// Hand-built mono WAV with a `LIST` chunk between `fmt ` and `data`
pub fn wav_with_list_chunk(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let info = b"INFOISFT\x06\x00\x00\x00tests\x00";
    let data_len = samples.len() * 2;

    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    let riff_len = 4 + (8 + 16) + (8 + info.len()) + (8 + data_len);
    wav.extend_from_slice(&(riff_len as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());

    wav.extend_from_slice(b"LIST");
    wav.extend_from_slice(&(info.len() as u32).to_le_bytes());
    wav.extend_from_slice(info);

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_len as u32).to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    wav
}

/// Strip every chunk after `fmt ` so no `data` chunk remains
pub fn wav_without_data(sample_rate: u32) -> Vec<u8> {
    let mut wav = encode_wav(&[0, 0], 1, sample_rate);
    wav.truncate(36);
    wav[4..8].copy_from_slice(&28u32.to_le_bytes());
    wav
}

/// Sample value the decoder is expected to produce for `sample`
pub fn normalized(sample: i16) -> f32 {
    sample as f32 / 32768.0
}
