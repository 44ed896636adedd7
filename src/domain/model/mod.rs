// Domain models - Core types and data structures

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Marker appended to the input name when the output name is derived from it
pub const CLIP_SUFFIX: &str = "_clip";

/// Stream and overwrite options shared by every clip of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Drop audio streams (`-an`)
    pub no_audio: bool,
    /// Drop video streams (`-vn`)
    pub no_video: bool,
    /// Overwrite existing outputs (`-y`), otherwise refuse (`-n`)
    pub overwrite: bool,
    /// Copy encoded streams instead of transcoding (`-c copy`)
    pub copy: bool,
}

impl Flags {
    /// True when both stream kinds are suppressed
    pub fn drops_all_streams(&self) -> bool {
        self.no_audio && self.no_video
    }
}

/// Start and end tokens of one clip, passed verbatim to the transcoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampPair {
    pub start: String,
    pub end: String,
}

impl TimestampPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for TimestampPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Where the user asked the clips to go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// No `--outfile` given
    Unspecified,
    /// `--outfile` names an existing directory
    Directory(PathBuf),
    /// `--outfile` names a file
    File(PathBuf),
}

/// Base path and extension every clip output is derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNameTemplate {
    /// Directory and name without extension, e.g. `out/movie_clip`
    pub base: PathBuf,
    /// Extension without the dot
    pub extension: OsString,
}

impl OutputNameTemplate {
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<OsString>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }

    /// Output path of clip `index` (1-based) out of `total`.
    ///
    /// A single clip gets no numeric suffix; otherwise the index is
    /// zero-padded to two digits.
    pub fn output_path(&self, index: usize, total: usize) -> PathBuf {
        let mut name: OsString = self.base.clone().into_os_string();
        if total > 1 {
            name.push(format!("_{index:02}"));
        }
        name.push(".");
        name.push(&self.extension);
        PathBuf::from(name)
    }
}

/// One fully resolved unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub start: String,
    pub end: String,
    pub flags: Flags,
}

impl ClipRequest {
    pub fn new(input: &Path, output: PathBuf, pair: TimestampPair, flags: Flags) -> Self {
        Self {
            input: input.to_path_buf(),
            output,
            start: pair.start,
            end: pair.end,
            flags,
        }
    }
}

/// Everything the front end hands to the sequencer for one run
#[derive(Debug, Clone)]
pub struct ClipJob {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub timestamps: Vec<String>,
    pub flags: Flags,
    /// Reject tokens outside the transcoder timestamp grammar up front
    pub check_timestamps: bool,
}

/// Result of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipReport {
    /// Produced files, in extraction order
    pub outputs: Vec<PathBuf>,
}

impl ClipReport {
    pub fn clip_count(&self) -> usize {
        self.outputs.len()
    }
}

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ProcessExit {
    fn from(status: std::process::ExitStatus) -> Self {
        Self::from_code(status.code())
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

#[cfg(test)]
mod tests;
