//! Trim Session
//!
//! Editor state around the pure trim/encode core: the loaded source audio,
//! the current region selection and the most recent trimmed buffer, which
//! stays resident so it can be downloaded any number of times.
//!
//! Every action either succeeds completely or leaves the session untouched.

use log::{info, warn};

use crate::engine::buffer::AudioBuffer;
use crate::engine::io::{Decoder, WavDecoder, WavFile};
use crate::engine::region::{RegionSelection, TimeRegion};
use crate::engine::trim::trim;
use crate::error::{CutterError, Result};

#[derive(Debug, Clone, Default)]
pub struct TrimSession {
    source: Option<AudioBuffer>,
    selection: RegionSelection,
    trimmed: Option<AudioBuffer>,
}

impl TrimSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load new source audio
    ///
    /// The selection is reset to cover the whole source and any previously
    /// trimmed buffer is discarded.
    pub fn load(&mut self, buffer: AudioBuffer) -> Result<()> {
        buffer.validate()?;

        info!(
            "Loaded source: {} channels, {:.3}s @ {} Hz",
            buffer.num_channels(),
            buffer.duration_secs(),
            buffer.sample_rate
        );

        self.selection.reset_to(&buffer);
        self.source = Some(buffer);
        self.trimmed = None;
        Ok(())
    }

    /// Decode `bytes` with `decoder` and load the result
    pub fn load_bytes<D: Decoder>(&mut self, decoder: &D, bytes: &[u8]) -> Result<()> {
        let buffer = decoder.decode(bytes)?;
        self.load(buffer)
    }

    /// Replace the current region
    pub fn select(&mut self, region: TimeRegion) {
        self.selection.update(region);
    }

    pub fn source(&self) -> Option<&AudioBuffer> {
        self.source.as_ref()
    }

    pub fn region(&self) -> Option<TimeRegion> {
        self.selection.current()
    }

    pub fn trimmed(&self) -> Option<&AudioBuffer> {
        self.trimmed.as_ref()
    }

    /// Trim the source to the current region and keep the result resident
    ///
    /// # Errors
    /// * `NoSource` - nothing loaded or no region selected
    /// * `EmptyRegion` / `OutOfRange` / `NonFiniteRegion` - the region does
    ///   not fit the source
    pub fn trim(&mut self) -> Result<&AudioBuffer> {
        let (source, region) = match (&self.source, self.selection.current()) {
            (Some(source), Some(region)) => (source, region),
            _ => {
                warn!("Trim requested with no audio file or region selected");
                return Err(CutterError::NoSource);
            }
        };

        let trimmed = trim(source, region)?;
        info!(
            "Trimmed region {:.3}s..{:.3}s to {} frames",
            region.start,
            region.end,
            trimmed.num_frames()
        );

        Ok(self.trimmed.insert(trimmed))
    }

    /// Encode the resident trimmed buffer for download
    ///
    /// # Errors
    /// * `NoTrimmedAudio` - [`TrimSession::trim`] has not succeeded yet
    pub fn download(&self) -> Result<WavFile> {
        let trimmed = self.trimmed.as_ref().ok_or(CutterError::NoTrimmedAudio)?;
        WavFile::encode(trimmed)
    }

    /// Encode the trimmed buffer and decode it again, as a waveform display
    /// reloading the exported file would see it
    pub fn preview(&self) -> Result<AudioBuffer> {
        let file = self.download()?;
        WavDecoder.decode(&file.bytes)
    }
}
