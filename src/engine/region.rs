//! Time regions and region selection
//!
//! A [`TimeRegion`] is an immutable `{start, end}` interval in seconds. The
//! selection component owns exactly one current region and replaces it
//! wholesale on every user interaction; nothing downstream ever sees the
//! interaction history.

use serde::{Deserialize, Serialize};

use crate::engine::buffer::AudioBuffer;
use crate::error::Result;

// ============================================================================
// Time Region
// ============================================================================

/// A contiguous time interval of the source audio, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRegion {
    pub start: f64,
    pub end: f64,
}

impl TimeRegion {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Region spanning the whole buffer
    ///
    /// The end is the smallest `f64` at or above `num_frames / sample_rate`
    /// whose floored frame index is exactly `num_frames`, so a full region
    /// always converts back to every frame of the buffer.
    pub fn full(buffer: &AudioBuffer) -> Self {
        Self::new(0.0, seconds_covering(buffer.num_frames(), buffer.sample_rate))
    }

    /// Parse a region from JSON of the form `{"start": 1.5, "end": 3.0}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Length of the region in seconds (negative if inverted)
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Convert to frame indices `(start_frame, end_frame)`
    ///
    /// Both bounds are floored independently: `floor(secs * sample_rate)`.
    /// No range checking is done here; see [`crate::engine::trim`].
    pub fn frame_range(&self, sample_rate: u32) -> (i64, i64) {
        let rate = sample_rate as f64;
        (
            (self.start * rate).floor() as i64,
            (self.end * rate).floor() as i64,
        )
    }
}

/// Smallest time in seconds that floors to `frames` at `sample_rate`
fn seconds_covering(frames: usize, sample_rate: u32) -> f64 {
    if sample_rate == 0 {
        return 0.0;
    }

    let rate = sample_rate as f64;
    let target = frames as f64;
    let mut secs = target / rate;

    // (n / sr) * sr can land one ulp short of n; step up until it doesn't
    while secs.is_finite() && (secs * rate).floor() < target {
        secs = f64::from_bits(secs.to_bits() + 1);
    }

    secs
}

// ============================================================================
// Region Selection
// ============================================================================

/// Owner of the single current region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSelection {
    current: Option<TimeRegion>,
}

impl RegionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the default region covering all of `buffer`
    ///
    /// Called when new audio becomes ready.
    pub fn reset_to(&mut self, buffer: &AudioBuffer) {
        self.current = Some(TimeRegion::full(buffer));
    }

    /// Replace the current region
    pub fn update(&mut self, region: TimeRegion) {
        self.current = Some(region);
    }

    pub fn current(&self) -> Option<TimeRegion> {
        self.current
    }
}
