//! Performance benchmarks for the request and response hot paths
//!
//! Run with: cargo bench
//! Or for specific benchmarks: cargo bench -- <filter>

use std::time::Duration;

use cognitive_tts::core::audio::WavPcmDecoder;
use cognitive_tts::core::tts::{Gender, SsmlRequestBuilder, VoiceCatalog, VoiceName};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Canonical 44-byte-header PCM WAV filled with a ramp
fn build_wav(frames: usize, channels: u16, sample_rate: u32) -> Vec<u8> {
    let data_len = frames * usize::from(channels) * 2;
    let mut wav = Vec::with_capacity(44 + data_len);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&((36 + data_len) as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * u32::from(channels) * 2).to_le_bytes());
    wav.extend_from_slice(&(channels * 2).to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_len as u32).to_le_bytes());
    for i in 0..frames * usize::from(channels) {
        wav.extend_from_slice(&(i as i16).to_le_bytes());
    }
    wav
}

/// Benchmark WAV decoding across payload sizes
fn bench_wav_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("wav_decode");
    group.measurement_time(Duration::from_secs(5));

    for (label, seconds, channels) in [("mono_1s", 1, 1), ("mono_10s", 10, 1), ("stereo_10s", 10, 2)]
    {
        let wav = build_wav(24000 * seconds, channels, 24000);
        group.throughput(Throughput::Bytes(wav.len() as u64));
        group.bench_with_input(BenchmarkId::new(label, wav.len()), &wav, |b, wav| {
            b.iter(|| WavPcmDecoder::decode(black_box(wav)));
        });
    }

    group.finish();
}

/// Benchmark SSML encoding for short and long utterances
fn bench_ssml_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ssml_build");
    let wire_name = VoiceCatalog::standard().wire_name(VoiceName::EnUsJessaRus);

    let short = "Hello world".to_string();
    let long = "Tom & Jerry <said> \"hi\" to the crowd. ".repeat(200);

    for (label, text) in [("short", &short), ("long_escaped", &long)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new(label, text.len()), text, |b, text| {
            b.iter(|| {
                SsmlRequestBuilder::build(
                    black_box("en-US"),
                    Gender::Female,
                    wire_name,
                    black_box(text),
                    0,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wav_decode, bench_ssml_build);
criterion_main!(benches);
