// Domain errors - Error types for the domain layer

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::model::ProcessExit;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Timestamps must come in start/end pairs
    #[error("Mismatched number of timestamps: {count}. Expected pairs: start1 end1 [start2 end2 ...]")]
    MismatchedTimestampCount { count: usize },

    /// File name without an extension separator
    #[error("Could not split file name '{name}' into name and extension")]
    NameParse { name: String },

    /// Timestamp rejected by the grammar check
    #[error("Invalid timestamp: {token}. Expected [-][HH:]MM:SS[.m...] or [-]S+[.m...][s|ms|us]")]
    InvalidTimestamp { token: String },

    /// Transcoder exited with a failure status
    #[error("Transcoder failed on clip {clip} of {total} ({output}): {status}")]
    TranscoderFailed {
        clip: usize,
        total: usize,
        output: PathBuf,
        status: ProcessExit,
    },

    /// Transcoder could not be started at all
    #[error("Failed to start transcoder '{program}': {source}")]
    TranscoderSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// File could not be read
    #[error("Cannot access {}: {source}", path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be loaded
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl DomainError {
    /// Errors caused by what the user typed, detected before anything runs
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            DomainError::MismatchedTimestampCount { .. }
                | DomainError::NameParse { .. }
                | DomainError::InvalidTimestamp { .. }
        )
    }
}
