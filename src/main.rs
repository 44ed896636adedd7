//! multiclip
//!
//! Extracts one or more time-bounded clips from a single media file by
//! running ffmpeg once per clip.
//!
//! # Usage
//!
//! ```bash
//! multiclip -i movie.mp4 00:00:10 00:00:20
//! multiclip -i movie.mp4 -o clips/ --copy 00:01:00 00:01:30 00:05:00 00:05:10
//! multiclip -i movie.mp4 -o trailer.mkv --noaudio -v 90 120
//! ```

use std::process::ExitCode;

use clap::Parser;

use multiclip::cli::{commands, Cli};
use multiclip::DomainError;

/// Exit status for invalid arguments, matching clap's usage errors
const EXIT_USAGE: u8 = 2;

/// Main entry point for the multiclip CLI
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    match commands::clip(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let user_input = e
                .downcast_ref::<DomainError>()
                .is_some_and(DomainError::is_user_input);
            if user_input {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
