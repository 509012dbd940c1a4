//! Decoder behaviour against WAV files produced by an independent encoder.

mod fixtures;

use std::time::Duration;

use cognitive_tts::core::audio::{DecodeError, WavPcmDecoder};
use fixtures::*;

#[test]
fn test_mono_round_trip_within_one_step() {
    let original = generate_sine_wave(SECOND / 10, 440.0, 0.8);
    let wav = mono_wav(&original);

    let audio = WavPcmDecoder::decode(&wav).unwrap();

    assert_eq!(audio.sample_rate, SAMPLE_RATE);
    assert_eq!(audio.channel_count, 1);
    assert_eq!(audio.len(), original.len());
    for (decoded, &source) in audio.samples.iter().zip(&original) {
        let restored = decoded * 32768.0;
        assert!(
            (restored - source as f32).abs() <= 1.0,
            "sample {source} decoded as {decoded}"
        );
    }
}

#[test]
fn test_full_scale_extremes() {
    let wav = mono_wav(&[i16::MIN, i16::MAX, 0]);
    let audio = WavPcmDecoder::decode(&wav).unwrap();

    assert_eq!(audio.samples[0], -1.0);
    assert_eq!(audio.samples[1], normalized(i16::MAX));
    assert!(audio.samples[1] < 1.0);
    assert_eq!(audio.samples[2], 0.0);
}

#[test]
fn test_one_second_duration() {
    let wav = mono_wav(&vec![0i16; SECOND]);
    let audio = WavPcmDecoder::decode(&wav).unwrap();
    assert_eq!(audio.duration(), Duration::from_secs(1));
}

#[test]
fn test_stereo_keeps_left_channel() {
    let left: Vec<i16> = (0..100).map(|i| i * 10).collect();
    let right: Vec<i16> = (0..100).map(|i| -i * 10).collect();
    let wav = stereo_wav(&left, &right, 16000);

    let audio = WavPcmDecoder::decode(&wav).unwrap();

    assert_eq!(audio.sample_rate, 16000);
    assert_eq!(audio.channel_count, 1);
    assert_eq!(audio.len(), left.len());
    let expected: Vec<f32> = left.iter().copied().map(normalized).collect();
    assert_eq!(audio.samples, expected);
}

#[test]
fn test_list_chunk_is_skipped() {
    let samples = [100i16, -200, 300];
    let wav = wav_with_list_chunk(&samples, 16000);

    let layout = WavPcmDecoder::inspect(&wav).unwrap();
    assert!(layout.data_offset > 44);
    assert_eq!(layout.declared_len, 6);

    let audio = WavPcmDecoder::decode(&wav).unwrap();
    let expected: Vec<f32> = samples.iter().copied().map(normalized).collect();
    assert_eq!(audio.samples, expected);
}

#[test]
fn test_missing_data_chunk_returns_error() {
    let wav = wav_without_data(16000);
    assert!(matches!(
        WavPcmDecoder::decode(&wav),
        Err(DecodeError::NoDataChunk)
    ));
}

#[test]
fn test_oversized_chunk_size_terminates() {
    let mut wav = wav_with_list_chunk(&[1, 2, 3], 16000);
    // LIST chunk size field sits right after the 16-byte fmt body
    wav[40..44].copy_from_slice(&u32::MAX.to_le_bytes());

    assert!(matches!(
        WavPcmDecoder::decode(&wav),
        Err(DecodeError::NoDataChunk)
    ));
}

#[test]
fn test_truncated_download_decodes_complete_frames() {
    let wav = mono_wav(&[1000, 2000, 3000, 4000]);
    // Drop the last sample and half of the one before it
    let cut = &wav[..wav.len() - 3];

    let audio = WavPcmDecoder::decode(cut).unwrap();
    assert_eq!(audio.samples, vec![normalized(1000), normalized(2000)]);
}

#[test]
fn test_header_only_is_rejected() {
    let wav = mono_wav(&[1000, 2000]);
    assert!(matches!(
        WavPcmDecoder::decode(&wav[..20]),
        Err(DecodeError::TooShort(20))
    ));
    assert!(matches!(
        WavPcmDecoder::decode(&wav[..45]),
        Err(DecodeError::Truncated(_))
    ));
}
