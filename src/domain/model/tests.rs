// Unit tests for domain models

use super::*;

#[test]
fn test_single_clip_has_no_suffix() {
    let template = OutputNameTemplate::new("movie_clip", "mp4");
    assert_eq!(template.output_path(1, 1), PathBuf::from("movie_clip.mp4"));
}

#[test]
fn test_multiple_clips_are_zero_padded() {
    let template = OutputNameTemplate::new("movie_clip", "mp4");
    assert_eq!(template.output_path(1, 2), PathBuf::from("movie_clip_01.mp4"));
    assert_eq!(template.output_path(2, 2), PathBuf::from("movie_clip_02.mp4"));
}

#[test]
fn test_index_past_two_digits_keeps_growing() {
    let template = OutputNameTemplate::new("movie_clip", "mp4");
    assert_eq!(
        template.output_path(100, 120),
        PathBuf::from("movie_clip_100.mp4")
    );
}

#[test]
fn test_template_keeps_directory() {
    let template = OutputNameTemplate::new(Path::new("out").join("movie_clip"), "mkv");
    assert_eq!(
        template.output_path(3, 12),
        Path::new("out").join("movie_clip_03.mkv")
    );
}

#[test]
fn test_clip_request_takes_pair_verbatim() {
    let request = ClipRequest::new(
        Path::new("a.mp4"),
        PathBuf::from("a_clip.mp4"),
        TimestampPair::new("10", "5"),
        Flags::default(),
    );

    // No reordering even when start > end
    assert_eq!(request.start, "10");
    assert_eq!(request.end, "5");
    assert_eq!(request.input, PathBuf::from("a.mp4"));
}

#[test]
fn test_flags_drop_all_streams() {
    let flags = Flags {
        no_audio: true,
        no_video: true,
        ..Flags::default()
    };
    assert!(flags.drops_all_streams());
    assert!(!Flags::default().drops_all_streams());
}

#[test]
fn test_process_exit_display() {
    assert!(ProcessExit::from_code(Some(0)).success());
    assert!(!ProcessExit::from_code(Some(1)).success());
    assert!(!ProcessExit::from_code(None).success());
    assert_eq!(ProcessExit::from_code(Some(1)).to_string(), "exit code 1");
    assert_eq!(ProcessExit::from_code(None).to_string(), "terminated by signal");
}
