//! Audio Cutter CLI
//!
//! Command-line interface for extracting audio regions.

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use audio_cutter::cli::{commands, Cli, Commands};
use audio_cutter::CutterError;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Audio Cutter v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Audio Cutter v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        report(&err);
        std::process::exit(1);
    }
}

fn handle_command(cmd: Commands) -> audio_cutter::Result<()> {
    match cmd {
        Commands::Trim {
            input,
            start,
            end,
            region,
            output,
        } => commands::trim_file(&input, start, end, region.as_deref(), &output),
        Commands::Info { input, json } => commands::show_info(&input, json),
    }
}

fn report(err: &CutterError) {
    error!("[{}] {}", err.error_code(), err);
    eprintln!("Error: {}", err);
    eprintln!("Hint: {}", err.recovery_hint());
}
