//! Audio file I/O for Audio Cutter
//!
//! Decoding is a seam: anything that turns file bytes into an [`AudioBuffer`]
//! implements [`Decoder`]. The bundled [`WavDecoder`] reads WAV files through
//! hound; compressed formats are expected to come from an external decoder.
//!
//! Encoded output is wrapped in a [`WavFile`] carrying the download name and
//! MIME type alongside the bytes.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::{debug, info};

use crate::engine::buffer::AudioBuffer;
use crate::engine::wav::{self, DEFAULT_EXPORT_FILE_NAME, WAV_MIME_TYPE};
use crate::error::{CutterError, Result};

// ============================================================================
// Decoder
// ============================================================================

/// Turns encoded audio bytes into a decoded buffer
pub trait Decoder {
    /// Decode a complete file held in memory
    ///
    /// # Errors
    /// * `Decode` - if the bytes are not audio this decoder understands
    fn decode(&self, bytes: &[u8]) -> Result<AudioBuffer>;
}

/// WAV decoder backed by hound
///
/// Integer PCM of any bit depth is scaled by `1 / 2^(bits - 1)`; float PCM is
/// passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavDecoder;

impl Decoder for WavDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<AudioBuffer> {
        let reader = WavReader::new(Cursor::new(bytes)).map_err(|e| CutterError::Decode {
            reason: format!("not a readable WAV stream: {}", e),
            source: Some(e),
        })?;
        read_buffer(reader)
    }
}

/// Load and decode a WAV file from disk
///
/// # Errors
/// * `Decode` - if the file is missing or is not a valid WAV file
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| CutterError::Decode {
        reason: format!("failed to open {}: {}", path.display(), e),
        source: Some(e),
    })?;

    let buffer = read_buffer(reader)?;
    info!(
        "Loaded {} ({} channels, {} frames @ {} Hz)",
        path.display(),
        buffer.num_channels(),
        buffer.num_frames(),
        buffer.sample_rate
    );
    Ok(buffer)
}

fn read_buffer<R: Read>(reader: WavReader<R>) -> Result<AudioBuffer> {
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let interleaved = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| CutterError::Decode {
                reason: format!("failed to read float samples: {}", e),
                source: Some(e),
            })?,
        SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| CutterError::Decode {
                    reason: format!("failed to read {}-bit samples: {}", spec.bits_per_sample, e),
                    source: Some(e),
                })?
        }
    };

    debug!(
        "Decoded {} samples ({} channels, {}-bit {:?})",
        interleaved.len(),
        channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    AudioBuffer::from_interleaved(&interleaved, channels, spec.sample_rate)
}

// ============================================================================
// Encoded output
// ============================================================================

/// An encoded WAV file ready to be offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    /// Suggested file name (always ends in `.wav`)
    pub file_name: String,
    /// MIME type, `audio/wav`
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl WavFile {
    /// Encode a buffer under the default download name
    pub fn encode(buffer: &AudioBuffer) -> Result<Self> {
        Ok(Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            mime_type: WAV_MIME_TYPE,
            bytes: wav::encode(buffer)?,
        })
    }

    /// Write the bytes to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.bytes)?;
        info!("Wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(())
    }

    /// Write the bytes into `dir` under [`WavFile::file_name`]
    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> Result<std::path::PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        self.write_to(&path)?;
        Ok(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
