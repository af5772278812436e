//! Region Trimmer
//!
//! Slices a decoded buffer down to the frames covered by a [`TimeRegion`].
//! The output is a fresh copy; the source buffer is never aliased.

use log::debug;

use crate::engine::buffer::AudioBuffer;
use crate::engine::region::TimeRegion;
use crate::error::{CutterError, Result};

/// Trim `buffer` to the frames `[floor(start * rate), floor(end * rate))`
///
/// No gain, fade or resampling is applied: the output is a strict slice with
/// the source's channel order and sample rate.
///
/// # Errors
/// * `InvalidBuffer` - if the source buffer is malformed
/// * `EmptyRegion` - if the region covers zero or fewer frames
/// * `NonFiniteRegion` - if either bound is NaN or infinite
/// * `OutOfRange` - if the region starts before frame 0 or ends past the last
///   frame
pub fn trim(buffer: &AudioBuffer, region: TimeRegion) -> Result<AudioBuffer> {
    buffer.validate()?;

    if !region.is_finite() {
        return Err(CutterError::NonFiniteRegion {
            start: region.start,
            end: region.end,
        });
    }

    let num_frames = buffer.num_frames();

    let (start_frame, end_frame) = region.frame_range(buffer.sample_rate);

    if end_frame <= start_frame {
        return Err(CutterError::EmptyRegion {
            start_frame,
            end_frame,
        });
    }

    if start_frame < 0 || end_frame > num_frames as i64 {
        return Err(CutterError::OutOfRange {
            start_frame,
            end_frame,
            num_frames,
        });
    }

    let range = start_frame as usize..end_frame as usize;
    let samples = buffer
        .samples
        .iter()
        .map(|channel| channel[range.clone()].to_vec())
        .collect();

    debug!(
        "Trimmed frames {}..{} of {} ({} channels @ {} Hz)",
        start_frame,
        end_frame,
        num_frames,
        buffer.num_channels(),
        buffer.sample_rate
    );

    Ok(AudioBuffer {
        samples,
        sample_rate: buffer.sample_rate,
    })
}
