//! CLI Module
//!
//! Command-line interface for Audio Cutter.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::DEFAULT_EXPORT_FILE_NAME;

/// Audio Cutter - extract a time region of an audio file as 16-bit PCM WAV
#[derive(Parser, Debug)]
#[command(name = "audio-cutter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trim a WAV file to a time region
    #[command(name = "trim")]
    Trim {
        /// Input WAV file
        input: PathBuf,

        /// Region start in seconds (default: 0)
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "region")]
        start: Option<f64>,

        /// Region end in seconds (default: end of the input)
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "region")]
        end: Option<f64>,

        /// Region as JSON, e.g. '{"start": 1.0, "end": 2.5}'
        #[arg(short, long)]
        region: Option<String>,

        /// Output WAV file
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// Print sample rate, channels and duration of a WAV file
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_trim_with_negative_start() {
        let cli = Cli::try_parse_from(["audio-cutter", "trim", "in.wav", "--start", "-1", "--end", "2"])
            .unwrap();
        match cli.command {
            Some(Commands::Trim {
                start, end, output, ..
            }) => {
                assert_eq!(start, Some(-1.0));
                assert_eq!(end, Some(2.0));
                assert_eq!(output, PathBuf::from("trimmed-audio.wav"));
            }
            other => panic!("Expected trim command, got: {:?}", other),
        }
    }

    #[test]
    fn test_region_conflicts_with_bounds() {
        let result = Cli::try_parse_from([
            "audio-cutter",
            "trim",
            "in.wav",
            "--start",
            "1",
            "--region",
            r#"{"start": 0, "end": 1}"#,
        ]);
        assert!(result.is_err());
    }
}
