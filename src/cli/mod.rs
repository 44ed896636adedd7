//! CLI module for multiclip
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config_initialization::LogFormat;
use crate::domain::model::{ClipJob, Flags};
use crate::ports::LogLevel;

pub mod commands;

/// Extract one or more clips from a media file with ffmpeg
///
/// Timestamps go in pairs: start1 end1 [start2 end2 ...]. Each pair produces
/// one clip. Use `--` before negative clock timestamps such as -00:00:05.
#[derive(Parser, Debug)]
#[command(name = "multiclip")]
#[command(version)]
#[command(about = "Extract one or more clips from a media file with ffmpeg")]
pub struct Cli {
    /// Path to the input file to extract clips from
    #[arg(short = 'i', long = "infile", value_name = "PATH")]
    pub infile: PathBuf,

    /// Path to store the extracted clips, can be a file or a directory
    #[arg(short = 'o', long = "outfile", value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Do not copy audio in the extracted clips
    #[arg(long)]
    pub noaudio: bool,

    /// Do not copy video in the extracted clips
    #[arg(long)]
    pub novideo: bool,

    /// Overwrite existing output files, defaults to no
    #[arg(long)]
    pub overwrite: bool,

    /// Perform a simple copy and do not transcode
    #[arg(long)]
    pub copy: bool,

    /// Increase logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Transcoder executable
    #[arg(long, value_name = "PROGRAM", env = "MULTICLIP_TRANSCODER")]
    pub transcoder: Option<String>,

    /// Settings file (defaults to ./multiclip.toml when present)
    #[arg(long, value_name = "PATH", env = "MULTICLIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject timestamps that are not in ffmpeg duration syntax before running
    #[arg(long)]
    pub check_timestamps: bool,

    /// Log line format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Start and end timestamps of the clips to extract
    #[arg(value_name = "TIMESTAMPS", allow_negative_numbers = true)]
    pub timestamps: Vec<String>,
}

impl Cli {
    /// Stream and overwrite options shared by every clip
    pub fn flags(&self) -> Flags {
        Flags {
            no_audio: self.noaudio,
            no_video: self.novideo,
            overwrite: self.overwrite,
            copy: self.copy,
        }
    }

    /// Logging level selected by the `-v` count
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_verbosity(self.verbose)
    }

    /// Hand the parsed arguments over to the sequencer
    pub fn into_job(self, check_timestamps: bool) -> ClipJob {
        let flags = self.flags();
        ClipJob {
            input: self.infile,
            output: self.outfile,
            timestamps: self.timestamps,
            flags,
            check_timestamps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["multiclip", "-i", "movie.mp4", "00:00:10", "00:00:20"])
            .unwrap();

        assert_eq!(cli.infile, PathBuf::from("movie.mp4"));
        assert_eq!(cli.outfile, None);
        assert_eq!(cli.timestamps, ["00:00:10", "00:00:20"]);
        assert_eq!(cli.flags(), Flags::default());
        assert_eq!(cli.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_parse_flags_and_verbosity() {
        let cli = Cli::try_parse_from([
            "multiclip",
            "--infile",
            "movie.mp4",
            "--outfile",
            "out",
            "--noaudio",
            "--copy",
            "-vv",
            "5",
            "10",
        ])
        .unwrap();

        assert_eq!(cli.outfile, Some(PathBuf::from("out")));
        assert_eq!(
            cli.flags(),
            Flags {
                no_audio: true,
                copy: true,
                ..Flags::default()
            }
        );
        assert_eq!(cli.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_negative_numbers_are_timestamps() {
        let cli = Cli::try_parse_from(["multiclip", "-i", "movie.mp4", "-5", "10"]).unwrap();
        assert_eq!(cli.timestamps, ["-5", "10"]);
    }

    #[test]
    fn test_timestamps_after_separator() {
        let cli =
            Cli::try_parse_from(["multiclip", "-i", "movie.mp4", "--", "-00:00:05", "00:00:10"])
                .unwrap();
        assert_eq!(cli.timestamps, ["-00:00:05", "00:00:10"]);
    }

    #[test]
    fn test_infile_is_required() {
        assert!(Cli::try_parse_from(["multiclip", "5", "10"]).is_err());
    }

    #[test]
    fn test_odd_count_is_left_to_the_validator() {
        let cli = Cli::try_parse_from(["multiclip", "-i", "movie.mp4", "5"]).unwrap();
        let job = cli.into_job(false);
        assert_eq!(job.timestamps.len(), 1);
    }
}
