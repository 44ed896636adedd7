//! End-to-end tests of the multiclip binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn multiclip(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("multiclip").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("MULTICLIP_TRANSCODER")
        .env_remove("MULTICLIP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_odd_timestamp_count_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    multiclip(&dir)
        .args(["-i", "movie.mp4", "00:00:10", "00:00:20", "00:00:30"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Mismatched number of timestamps: 3"));
}

#[test]
fn test_missing_timestamps_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    multiclip(&dir)
        .args(["-i", "movie.mp4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Mismatched number of timestamps: 0"));
}

#[test]
fn test_missing_infile_is_rejected_by_clap() {
    let dir = TempDir::new().unwrap();

    multiclip(&dir)
        .args(["00:00:10", "00:00:20"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--infile"));
}

#[test]
fn test_input_without_extension() {
    let dir = TempDir::new().unwrap();

    multiclip(&dir)
        .args(["-i", "movie", "5", "10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'movie'"));
}

#[test]
fn test_checked_timestamps_reject_garbage() {
    let dir = TempDir::new().unwrap();

    multiclip(&dir)
        .args(["--check-timestamps", "-i", "movie.mp4", "5", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid timestamp: soon"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    multiclip(&dir)
        .args(["--config", "nowhere.toml", "-i", "movie.mp4", "5", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_transcoder() {
    let dir = TempDir::new().unwrap();

    multiclip(&dir)
        .args(["--transcoder", "multiclip-no-such-transcoder", "-i", "movie.mp4", "5", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to start transcoder 'multiclip-no-such-transcoder'",
        ));
}

#[cfg(unix)]
mod unix {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use super::*;

    /// Shell script that logs its arguments and fails on the second clip
    fn fake_transcoder(dir: &Path) -> PathBuf {
        let script = dir.join("fake-ffmpeg");
        fs::write(
            &script,
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> \"$FAKE_TRANSCODER_LOG\"\n\
             case \"$*\" in *_02.*) exit 3 ;; esac\n\
             exit 0\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn logged_calls(log: &Path) -> Vec<String> {
        fs::read_to_string(log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_successful_transcoder() {
        let dir = TempDir::new().unwrap();

        multiclip(&dir)
            .args(["--transcoder", "true", "-i", "movie.mp4", "5", "10"])
            .assert()
            .success();
    }

    #[test]
    fn test_failing_transcoder() {
        let dir = TempDir::new().unwrap();

        multiclip(&dir)
            .args(["--transcoder", "false", "-i", "movie.mp4", "5", "10"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Transcoder failed on clip 1 of 1"))
            .stderr(predicate::str::contains("exit code 1"));
    }

    #[test]
    fn test_failure_on_second_clip_skips_third() {
        let dir = TempDir::new().unwrap();
        let script = fake_transcoder(dir.path());
        let log = dir.path().join("calls.log");

        multiclip(&dir)
            .env("FAKE_TRANSCODER_LOG", &log)
            .arg("--transcoder")
            .arg(&script)
            .args(["--copy", "-i", "movie.mp4", "1", "2", "3", "4", "5", "6"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("clip 2 of 3"))
            .stderr(predicate::str::contains("exit code 3"));

        assert_eq!(
            logged_calls(&log),
            [
                "-loglevel fatal -i movie.mp4 -ss 1 -to 2 -c copy -n movie_clip_01.mp4",
                "-loglevel fatal -i movie.mp4 -ss 3 -to 4 -c copy -n movie_clip_02.mp4",
            ]
        );
    }

    #[test]
    fn test_output_directory_and_config_file() {
        let dir = TempDir::new().unwrap();
        let script = fake_transcoder(dir.path());
        let log = dir.path().join("calls.log");
        fs::create_dir(dir.path().join("out")).unwrap();
        fs::write(
            dir.path().join("multiclip.toml"),
            format!("[multiclip]\ntranscoder = \"{}\"\n", script.display()),
        )
        .unwrap();

        multiclip(&dir)
            .env("FAKE_TRANSCODER_LOG", &log)
            .args(["--overwrite", "--noaudio", "-o", "out", "-i", "movie.mp4", "5", "10"])
            .assert()
            .success();

        assert_eq!(
            logged_calls(&log),
            ["-loglevel fatal -i movie.mp4 -ss 5 -to 10 -an -y out/movie_clip.mp4"]
        );
    }
}
