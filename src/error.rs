//! Error handling for Audio Cutter
//!
//! Every failure is a local validation failure: the same inputs always fail
//! the same way, so nothing here is retried. Each variant carries a recovery
//! hint suitable for showing to the user.

use thiserror::Error;

/// Result type alias for Audio Cutter operations
pub type Result<T> = std::result::Result<T, CutterError>;

/// Main error type for Audio Cutter operations
#[derive(Error, Debug)]
pub enum CutterError {
    // Region Errors
    #[error("Empty region: frames {start_frame}..{end_frame} contain no audio")]
    EmptyRegion { start_frame: i64, end_frame: i64 },

    #[error(
        "Region out of range: frames {start_frame}..{end_frame} exceed source of {num_frames} frames"
    )]
    OutOfRange {
        start_frame: i64,
        end_frame: i64,
        num_frames: usize,
    },

    #[error("Region bounds must be finite, got {start}..{end} seconds")]
    NonFiniteRegion { start: f64, end: f64 },

    // Buffer Errors
    #[error("Invalid audio buffer: {reason}")]
    InvalidBuffer { reason: String },

    // Decoder Errors
    #[error("Failed to decode audio: {reason}")]
    Decode {
        reason: String,
        #[source]
        source: Option<hound::Error>,
    },

    // Session Errors
    #[error("No audio file or region selected")]
    NoSource,

    #[error("No trimmed audio available for download")]
    NoTrimmedAudio,

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CutterError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            CutterError::EmptyRegion { .. } => "EMPTY_REGION",
            CutterError::OutOfRange { .. } | CutterError::NonFiniteRegion { .. } => "OUT_OF_RANGE",
            CutterError::InvalidBuffer { .. } => "INVALID_BUFFER",
            CutterError::Decode { .. } => "DECODE_ERROR",
            CutterError::NoSource => "NO_SOURCE",
            CutterError::NoTrimmedAudio => "NO_TRIMMED_AUDIO",
            CutterError::Io(_) => "IO_ERROR",
            CutterError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            CutterError::EmptyRegion { .. } => "Drag the region handles apart so the selection covers some audio",
            CutterError::OutOfRange { .. } => "Keep the selected region within the length of the loaded audio",
            CutterError::NonFiniteRegion { .. } => "Give the region start and end as ordinary numbers of seconds",
            CutterError::InvalidBuffer { .. } => "Reload the audio file; the decoded data is malformed",
            CutterError::Decode { .. } => "Check that the file exists and is a valid WAV file",
            CutterError::NoSource => "Load an audio file before trimming",
            CutterError::NoTrimmedAudio => "Trim a region before downloading",
            CutterError::Io(_) => "Check that the output location is writable",
            CutterError::Serialization(_) => "Provide the region as {\"start\": <secs>, \"end\": <secs>}",
        }
    }

    pub(crate) fn invalid_buffer(reason: impl Into<String>) -> Self {
        CutterError::InvalidBuffer {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CutterError::EmptyRegion {
            start_frame: 10,
            end_frame: 10,
        };
        assert_eq!(err.error_code(), "EMPTY_REGION");
        assert_eq!(CutterError::NoTrimmedAudio.error_code(), "NO_TRIMMED_AUDIO");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CutterError::OutOfRange {
            start_frame: -44100,
            end_frame: 88200,
            num_frames: 441000,
        };
        let message = err.to_string();
        assert!(message.contains("-44100..88200"));
        assert!(message.contains("441000"));
    }

    #[test]
    fn test_non_finite_region_message() {
        let err = CutterError::NonFiniteRegion {
            start: 0.0,
            end: f64::INFINITY,
        };
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
        assert!(err.to_string().contains("0..inf"));
        assert!(!err.to_string().contains("frames"));
    }

    #[test]
    fn test_recovery_hints() {
        assert!(!CutterError::NoSource.recovery_hint().is_empty());
        assert!(!CutterError::invalid_buffer("no channels")
            .recovery_hint()
            .is_empty());
    }
}
