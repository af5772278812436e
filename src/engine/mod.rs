//! Audio Engine Module
//!
//! Core region extraction pipeline:
//! - Audio buffer model and validation
//! - Time regions and region selection
//! - Region trimming
//! - 16-bit PCM WAV encoding
//! - Decoding and file I/O
//! - Trim session state

pub mod buffer;
pub mod io;
pub mod region;
pub mod session;
pub mod trim;
pub mod wav;

pub use buffer::{AudioBuffer, BufferInfo};
pub use io::{load_wav, Decoder, WavDecoder, WavFile};
pub use region::{RegionSelection, TimeRegion};
pub use session::TrimSession;
pub use trim::trim;
pub use wav::{encode, quantize_sample, WavHeader, DEFAULT_EXPORT_FILE_NAME, WAV_MIME_TYPE};
