//! WAV Encoder
//!
//! Serializes an [`AudioBuffer`] into a canonical 16-bit linear PCM WAV file:
//! a fixed 44-byte RIFF header followed by frame-interleaved little-endian
//! samples. Output carries no timestamps or metadata chunks, so the same
//! buffer always encodes to the same bytes.

use std::io::Write;

use log::debug;

use crate::engine::buffer::AudioBuffer;
use crate::error::{CutterError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Size of the RIFF/fmt/data header in bytes
pub const WAV_HEADER_LEN: usize = 44;

/// MIME type offered alongside encoded files
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// File name used when a trimmed region is downloaded
pub const DEFAULT_EXPORT_FILE_NAME: &str = "trimmed-audio.wav";

const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;
const FMT_CHUNK_SIZE: u32 = 16;
const FORMAT_PCM: u16 = 1;

// ============================================================================
// Quantization
// ============================================================================

/// Quantize a float sample to signed 16-bit PCM
///
/// Negative samples scale by 32768 and non-negative samples by 32767, so
/// `-1.0 -> -32768` and `1.0 -> 32767` exactly. The scaled value is rounded
/// and then reduced modulo 2^16 without clamping: out-of-range input wraps
/// around (e.g. `1.5 -> -16385`, `32768.0 -> -32768`) however large it is.
/// NaN and both infinities have no low bits to keep and encode as 0.
#[inline]
pub fn quantize_sample(sample: f32) -> i16 {
    let sample = sample as f64;
    let scaled = if sample < 0.0 {
        sample * 32768.0
    } else {
        sample * 32767.0
    };

    let rounded = scaled.round();
    if !rounded.is_finite() {
        return 0;
    }
    // f32 range is well inside f64's exact-integer range after scaling
    rounded.rem_euclid(65536.0) as u16 as i16
}

// ============================================================================
// Header
// ============================================================================

/// Header fields of a 16-bit PCM WAV file
///
/// Only constructed through [`WavHeader::new`] or [`WavHeader::for_buffer`],
/// which reject any combination whose derived sizes overflow their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    channels: u16,
    sample_rate: u32,
    num_frames: u32,
}

impl WavHeader {
    /// Build a header from raw field values
    ///
    /// # Errors
    /// * `InvalidBuffer` - zero channels or sample rate, or a block align,
    ///   byte rate or RIFF size that does not fit its header field
    pub fn new(channels: u16, sample_rate: u32, num_frames: u32) -> Result<Self> {
        if channels == 0 {
            return Err(CutterError::invalid_buffer("a WAV file needs at least one channel"));
        }
        if sample_rate == 0 {
            return Err(CutterError::invalid_buffer("sample rate must be positive"));
        }
        if channels.checked_mul(BYTES_PER_SAMPLE).is_none() {
            return Err(CutterError::invalid_buffer(format!(
                "{} channels cannot be described by a WAV header",
                channels
            )));
        }

        let header = Self {
            channels,
            sample_rate,
            num_frames,
        };

        if header.checked_data_size().is_none() || header.checked_byte_rate().is_none() {
            return Err(CutterError::invalid_buffer(
                "audio is too large to describe in a WAV header",
            ));
        }

        Ok(header)
    }

    /// Compute the header for a buffer, checking that every field fits
    pub fn for_buffer(buffer: &AudioBuffer) -> Result<Self> {
        buffer.validate()?;

        let channels = u16::try_from(buffer.num_channels()).map_err(|_| {
            CutterError::invalid_buffer(format!(
                "{} channels cannot be described by a WAV header",
                buffer.num_channels()
            ))
        })?;

        let num_frames = u32::try_from(buffer.num_frames()).map_err(|_| {
            CutterError::invalid_buffer(format!(
                "{} frames exceed the WAV size limit",
                buffer.num_frames()
            ))
        })?;

        Self::new(channels, buffer.sample_rate, num_frames)
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_frames(&self) -> u32 {
        self.num_frames
    }

    /// Bytes per frame (`channels * 2`)
    pub fn block_align(&self) -> u16 {
        self.channels * BYTES_PER_SAMPLE
    }

    /// Bytes per second (`sample_rate * channels * 2`)
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Size of the data chunk payload (`frames * channels * 2`)
    pub fn data_size(&self) -> u32 {
        self.num_frames * self.block_align() as u32
    }

    /// Value of the RIFF ChunkSize field (`36 + data_size`)
    pub fn riff_size(&self) -> u32 {
        36 + self.data_size()
    }

    /// Total length of the encoded file
    pub fn file_len(&self) -> usize {
        WAV_HEADER_LEN + self.data_size() as usize
    }

    fn checked_byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.block_align() as u32)
    }

    fn checked_data_size(&self) -> Option<u32> {
        self.num_frames
            .checked_mul(self.block_align() as u32)
            .and_then(|size| size.checked_add(36))
            .map(|riff| riff - 36)
    }

    /// Serialize the 44 header bytes
    pub fn to_bytes(&self) -> [u8; WAV_HEADER_LEN] {
        let mut bytes = [0u8; WAV_HEADER_LEN];

        // RIFF header
        bytes[0..4].copy_from_slice(b"RIFF");
        bytes[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        bytes[8..12].copy_from_slice(b"WAVE");

        // fmt chunk
        bytes[12..16].copy_from_slice(b"fmt ");
        bytes[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        bytes[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.channels.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        bytes[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        bytes[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

        // data chunk
        bytes[36..40].copy_from_slice(b"data");
        bytes[40..44].copy_from_slice(&self.data_size().to_le_bytes());

        bytes
    }
}

// ============================================================================
// Encoder
// ============================================================================

/// Encode a buffer as a complete 16-bit PCM WAV file
///
/// # Errors
/// * `InvalidBuffer` - no channels, unequal channel lengths, zero sample rate,
///   or a buffer too large for the 32-bit WAV size fields
pub fn encode(buffer: &AudioBuffer) -> Result<Vec<u8>> {
    let header = WavHeader::for_buffer(buffer)?;

    let mut bytes = Vec::with_capacity(header.file_len());
    bytes.extend_from_slice(&header.to_bytes());

    for sample in buffer.to_interleaved() {
        bytes.extend_from_slice(&quantize_sample(sample).to_le_bytes());
    }

    debug!(
        "Encoded {} frames x {} channels @ {} Hz into {} bytes",
        header.num_frames(),
        header.channels(),
        header.sample_rate(),
        bytes.len()
    );

    Ok(bytes)
}

/// Encode a buffer and write the WAV bytes to `writer`
pub fn encode_to<W: Write>(buffer: &AudioBuffer, writer: &mut W) -> Result<()> {
    let bytes = encode(buffer)?;
    writer.write_all(&bytes)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
