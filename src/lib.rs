//! Audio Cutter - Audio Region Extraction
//!
//! Audio Cutter takes decoded audio, cuts out a selected time region and
//! encodes it as uncompressed 16-bit PCM WAV.
//!
//! # Architecture
//!
//! The pipeline has two pure stages:
//! - Region Trimmer: time region -> frame range -> copied per-channel slice
//! - WAV Encoder: multi-channel float buffer -> byte-exact 44-byte-header WAV
//!
//! Decoding sits behind the [`engine::Decoder`] trait, and
//! [`engine::TrimSession`] holds the editor state (source, selection,
//! resident trimmed buffer) between user actions.

pub mod cli;
pub mod engine;
pub mod error;

pub use engine::{encode, trim, AudioBuffer, TimeRegion};
pub use error::{CutterError, Result};
