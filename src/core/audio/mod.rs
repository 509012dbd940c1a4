//! Audio decoding and playback hand-off.

mod playback;
mod wav;

pub use playback::{PlaybackAdapter, PlaybackError, WavFileSink};
pub use wav::{AudioBuffer, DecodeError, MIN_HEADER_LEN, WavLayout, WavPcmDecoder};
