//! Path utilities for splitting file names

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Outcome of splitting a file name at its extension separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNameMatch {
    /// Text before and after the last dot
    Matched { name: OsString, extension: OsString },
    /// No dot in the file name
    NoMatch,
}

/// Split a file name into name and extension at the last `.`.
///
/// Unlike [`Path::file_stem`], a leading dot counts as a separator
/// (`.mp4` gives an empty name) and a trailing dot gives an empty extension.
/// Bytes that are not valid UTF-8 are kept as they are.
pub fn split_file_name(file_name: &OsStr) -> FileNameMatch {
    let bytes = file_name.as_encoded_bytes();
    let Some(dot) = bytes.iter().rposition(|&b| b == b'.') else {
        return FileNameMatch::NoMatch;
    };

    // SAFETY: both halves come from `as_encoded_bytes` and are split right
    // next to an ASCII `.`, which is always a valid boundary.
    let (name, extension) = unsafe {
        (
            OsStr::from_encoded_bytes_unchecked(&bytes[..dot]),
            OsStr::from_encoded_bytes_unchecked(&bytes[dot + 1..]),
        )
    };

    FileNameMatch::Matched {
        name: name.to_os_string(),
        extension: extension.to_os_string(),
    }
}

/// Final component of a path, empty when there is none
pub fn base_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or_default()
}

/// Parent directory of a path, empty for bare file names
pub fn dir_name(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}
