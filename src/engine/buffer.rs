//! Audio Buffer
//!
//! The decoded, in-memory representation of audio shared by the trimmer and
//! the WAV encoder. Samples are stored non-interleaved as 32-bit floats, one
//! `Vec<f32>` per channel.

use serde::Serialize;

use crate::error::{CutterError, Result};

// ============================================================================
// Audio Buffer
// ============================================================================

/// Decoded multi-channel audio
///
/// Fields are public because buffers arrive from an external decoder. The
/// channel invariants (at least one channel, all channels the same length,
/// positive sample rate) are therefore checked by [`AudioBuffer::validate`]
/// rather than enforced at construction.
///
/// # Example
/// ```
/// use audio_cutter::engine::AudioBuffer;
///
/// let buffer = AudioBuffer::new(vec![vec![0.0; 4410], vec![0.0; 4410]], 44100).unwrap();
/// assert_eq!(buffer.num_channels(), 2);
/// assert_eq!(buffer.num_frames(), 4410);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample data: outer Vec is channels, inner Vec is frames
    pub samples: Vec<Vec<f32>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a validated buffer from per-channel sample data
    ///
    /// # Errors
    /// * `InvalidBuffer` - no channels, unequal channel lengths, or zero sample rate
    pub fn new(samples: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        let buffer = Self {
            samples,
            sample_rate,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Create a buffer from interleaved sample data
    ///
    /// # Arguments
    /// * `interleaved` - Interleaved samples (L, R, L, R, ... for stereo)
    /// * `channels` - Number of channels in the interleaved data
    /// * `sample_rate` - Sample rate in Hz
    pub fn from_interleaved(interleaved: &[f32], channels: usize, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(CutterError::invalid_buffer("buffer has no channels"));
        }

        if interleaved.len() % channels != 0 {
            return Err(CutterError::invalid_buffer(format!(
                "interleaved data length {} is not divisible by channel count {}",
                interleaved.len(),
                channels
            )));
        }

        let num_frames = interleaved.len() / channels;
        let mut samples = vec![Vec::with_capacity(num_frames); channels];

        for frame in interleaved.chunks_exact(channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                samples[ch].push(sample);
            }
        }

        Self::new(samples, sample_rate)
    }

    /// Create a silent buffer
    pub fn silence(num_frames: usize, channels: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![vec![0.0; num_frames]; channels],
            sample_rate,
        }
    }

    /// Create a mono sine wave test tone
    pub fn sine_wave(frequency: f32, duration_secs: f32, sample_rate: u32) -> Self {
        let num_frames = (duration_secs * sample_rate as f32) as usize;
        let angular_freq = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;

        let samples = (0..num_frames)
            .map(|i| (angular_freq * i as f32).sin())
            .collect();

        Self {
            samples: vec![samples],
            sample_rate,
        }
    }

    /// Convert the buffer to interleaved order (all channels of frame 0, then frame 1, ...)
    ///
    /// Assumes a validated buffer; frames beyond the shortest channel are dropped.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let num_frames = self.samples.iter().map(Vec::len).min().unwrap_or(0);
        let mut interleaved = Vec::with_capacity(num_frames * self.num_channels());

        for frame in 0..num_frames {
            for channel in &self.samples {
                interleaved.push(channel[frame]);
            }
        }

        interleaved
    }

    /// Get the number of channels
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.samples.len()
    }

    /// Get the number of frames (samples per channel)
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.samples.first().map(|ch| ch.len()).unwrap_or(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_frames() == 0
    }

    /// Get the duration in seconds (`num_frames / sample_rate`)
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples, or None if out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.samples.get(index).map(Vec::as_slice)
    }

    /// Check the structural invariants of the buffer
    ///
    /// # Errors
    /// * `InvalidBuffer` - describing the first violated invariant
    pub fn validate(&self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(CutterError::invalid_buffer("buffer has no channels"));
        }

        if self.sample_rate == 0 {
            return Err(CutterError::invalid_buffer("sample rate must be positive"));
        }

        let expected = self.num_frames();
        if let Some((index, channel)) = self
            .samples
            .iter()
            .enumerate()
            .find(|(_, ch)| ch.len() != expected)
        {
            return Err(CutterError::invalid_buffer(format!(
                "channel {} has {} frames, channel 0 has {}",
                index,
                channel.len(),
                expected
            )));
        }

        Ok(())
    }

    /// Summarize the buffer for display
    pub fn info(&self) -> BufferInfo {
        BufferInfo {
            sample_rate: self.sample_rate,
            channels: self.num_channels(),
            frames: self.num_frames(),
            duration_secs: self.duration_secs(),
        }
    }
}

// ============================================================================
// Buffer Info
// ============================================================================

/// Descriptive summary of an [`AudioBuffer`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BufferInfo {
    pub sample_rate: u32,
    pub channels: usize,
    pub frames: usize,
    pub duration_secs: f64,
}

// ============================================================================
// Tests
// ============================================================================
