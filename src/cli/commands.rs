//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;
use sha2::{Digest, Sha256};

use crate::engine::{load_wav, AudioBuffer, TimeRegion, TrimSession};
use crate::error::Result;

/// Work out the region to cut from the command-line arguments.
///
/// A JSON region wins; otherwise missing bounds default to the start and end
/// of the source.
pub fn resolve_region(
    source: &AudioBuffer,
    start: Option<f64>,
    end: Option<f64>,
    region_json: Option<&str>,
) -> Result<TimeRegion> {
    if let Some(json) = region_json {
        return TimeRegion::from_json(json);
    }

    let full = TimeRegion::full(source);
    Ok(TimeRegion::new(
        start.unwrap_or(full.start),
        end.unwrap_or(full.end),
    ))
}

/// Trim a WAV file and write the selected region to `output`.
pub fn trim_file(
    input: &Path,
    start: Option<f64>,
    end: Option<f64>,
    region_json: Option<&str>,
    output: &Path,
) -> Result<()> {
    info!("Trimming {} into {}", input.display(), output.display());

    let source = load_wav(input)?;
    let region = resolve_region(&source, start, end, region_json)?;

    let mut session = TrimSession::new();
    session.load(source)?;
    session.select(region);

    let frames = session.trim()?.num_frames();
    let file = session.download()?;
    file.write_to(output)?;

    println!("Trimmed: {} frames", frames);
    println!("Written: {} ({} bytes, {})", output.display(), file.bytes.len(), file.mime_type);
    println!("SHA-256: {}", checksum(&file.bytes));

    Ok(())
}

/// Print a summary of a WAV file.
pub fn show_info(input: &Path, json: bool) -> Result<()> {
    let buffer = load_wav(input)?;
    let info = buffer.info();

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("File: {}", input.display());
    println!("{:-<40}", "");
    println!("Sample rate: {} Hz", info.sample_rate);
    println!("Channels:    {}", info.channels);
    println!("Frames:      {}", info.frames);
    println!("Duration:    {:.3}s", info.duration_secs);

    Ok(())
}

/// Hex-encoded SHA-256 of `bytes`.
pub fn checksum(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
