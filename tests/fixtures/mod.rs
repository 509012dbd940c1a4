//! Test Fixtures Module
//!
//! Shared WAV builders for the integration tests.

// Each test binary uses a different subset of the fixtures
#![allow(dead_code)]

pub mod audio_fixtures;

pub use audio_fixtures::*;
