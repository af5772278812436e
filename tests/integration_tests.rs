//! Integration Tests
//!
//! End-to-end tests for the decode -> trim -> encode pipeline.

use audio_cutter::engine::{
    encode, load_wav, quantize_sample, trim, AudioBuffer, Decoder, TimeRegion, TrimSession,
    WavDecoder, WAV_MIME_TYPE,
};
use audio_cutter::CutterError;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// Helper to create a stereo test buffer with distinct channels
fn create_stereo_buffer(sample_rate: u32, duration_secs: f32) -> AudioBuffer {
    let left = AudioBuffer::sine_wave(440.0, duration_secs, sample_rate);
    let right = AudioBuffer::sine_wave(880.0, duration_secs, sample_rate);
    AudioBuffer::new(
        vec![left.samples[0].clone(), right.samples[0].clone()],
        sample_rate,
    )
    .unwrap()
}

fn data_samples(bytes: &[u8]) -> Vec<i16> {
    bytes[44..]
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

// === Full Pipeline Tests ===

#[test]
fn test_trim_then_encode_header() {
    let source = create_stereo_buffer(44100, 2.0);
    let trimmed = trim(&source, TimeRegion::new(1.0, 1.5)).unwrap();
    assert_eq!(trimmed.num_frames(), 22050);

    let bytes = encode(&trimmed).unwrap();
    assert_eq!(bytes.len(), 44 + 22050 * 2 * 2);
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 36 + 88200);
    assert_eq!(u16::from_le_bytes(bytes[22..24].try_into().unwrap()), 2);
    assert_eq!(u32::from_le_bytes(bytes[24..28].try_into().unwrap()), 44100);
    assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 88200);
}

#[test]
fn test_encoded_samples_match_trimmed_source() {
    let source = create_stereo_buffer(8000, 1.0);
    let trimmed = trim(&source, TimeRegion::new(0.25, 0.5)).unwrap();
    let bytes = encode(&trimmed).unwrap();

    let expected: Vec<i16> = source.samples[0][2000..4000]
        .iter()
        .zip(source.samples[1][2000..4000].iter())
        .flat_map(|(&l, &r)| [quantize_sample(l), quantize_sample(r)])
        .collect();

    assert_eq!(data_samples(&bytes), expected);
}

#[test]
fn test_full_region_round_trip_identity() {
    let source = create_stereo_buffer(48000, 0.5);
    let trimmed = trim(&source, TimeRegion::full(&source)).unwrap();
    assert_eq!(trimmed, source);
    assert_eq!(encode(&trimmed).unwrap(), encode(&source).unwrap());
}

#[test]
fn test_encoded_file_is_readable_by_hound() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trimmed.wav");

    let source = create_stereo_buffer(22050, 1.0);
    let trimmed = trim(&source, TimeRegion::new(0.1, 0.6)).unwrap();
    std::fs::write(&path, encode(&trimmed).unwrap()).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.duration() as usize, trimmed.num_frames());

    let loaded = load_wav(&path).unwrap();
    assert_eq!(loaded.num_frames(), trimmed.num_frames());
}

#[test]
fn test_clipped_samples_wrap_instead_of_clamping() {
    let buffer = AudioBuffer::new(vec![vec![1.5, -1.5, 1.0, -1.0]], 8000).unwrap();
    let bytes = encode(&buffer).unwrap();
    assert_eq!(data_samples(&bytes), vec![-16385, 16384, 32767, -32768]);
}

// === Rejection Tests ===

#[test]
fn test_rejections() {
    let source = create_stereo_buffer(44100, 10.0);

    assert!(matches!(
        trim(&source, TimeRegion::new(5.0, 5.0)),
        Err(CutterError::EmptyRegion { .. })
    ));
    assert!(matches!(
        trim(&source, TimeRegion::new(-1.0, 2.0)),
        Err(CutterError::OutOfRange { .. })
    ));

    let ragged = AudioBuffer {
        samples: vec![vec![0.0; 10], vec![0.0; 11]],
        sample_rate: 44100,
    };
    assert!(matches!(
        encode(&ragged),
        Err(CutterError::InvalidBuffer { .. })
    ));
}

// === Session Tests ===

#[test]
fn test_session_load_trim_download() {
    let dir = tempdir().unwrap();
    let source_bytes = encode(&create_stereo_buffer(16000, 3.0)).unwrap();

    let mut session = TrimSession::new();
    session.load_bytes(&WavDecoder, &source_bytes).unwrap();
    assert_eq!(session.region(), Some(TimeRegion::new(0.0, 3.0)));

    session.select(TimeRegion::new(1.0, 2.0));
    session.trim().unwrap();

    let file = session.download().unwrap();
    assert_eq!(file.mime_type, WAV_MIME_TYPE);
    assert!(file.file_name.ends_with(".wav"));

    let path = file.save_in(dir.path()).unwrap();
    let reloaded = WavDecoder.decode(&std::fs::read(path).unwrap()).unwrap();
    assert_eq!(reloaded.num_frames(), 16000);
    assert_eq!(reloaded, session.preview().unwrap());
}

#[test]
fn test_session_repeat_download_is_byte_identical() {
    let mut session = TrimSession::new();
    session.load(create_stereo_buffer(44100, 2.0)).unwrap();
    session.select(TimeRegion::new(0.3, 1.7));
    session.trim().unwrap();

    let downloads: Vec<Vec<u8>> = (0..3).map(|_| session.download().unwrap().bytes).collect();
    assert_eq!(downloads[0], downloads[1]);
    assert_eq!(downloads[1], downloads[2]);
}
