// Domain rules - Timestamp pairing and output naming policies

use std::ffi::OsString;
use std::path::Path;

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::utils::path::{base_name, dir_name, split_file_name, FileNameMatch};
use crate::utils::time::is_valid_timestamp;

/// Ordered `(start, end)` pairs taken two at a time from the CLI tokens
#[derive(Debug)]
pub struct TimestampPairs {
    tokens: std::vec::IntoIter<String>,
    total: usize,
}

impl TimestampPairs {
    /// Accept an even, non-empty token list
    pub fn new(tokens: Vec<String>) -> Result<Self, DomainError> {
        let count = tokens.len();
        if count < 2 || count % 2 != 0 {
            return Err(DomainError::MismatchedTimestampCount { count });
        }

        Ok(Self {
            tokens: tokens.into_iter(),
            total: count / 2,
        })
    }

    /// Number of pairs the run will extract
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Iterator for TimestampPairs {
    type Item = TimestampPair;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.tokens.next()?;
        let end = self.tokens.next()?;
        Some(TimestampPair { start, end })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len() / 2;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimestampPairs {}

/// Reject the first token outside the transcoder timestamp grammar
pub fn check_timestamp_grammar(tokens: &[String]) -> Result<(), DomainError> {
    match tokens.iter().find(|token| !is_valid_timestamp(token)) {
        Some(token) => Err(DomainError::InvalidTimestamp {
            token: token.clone(),
        }),
        None => Ok(()),
    }
}

/// Derive the output base path and extension for a run.
///
/// Without an explicit output file the name comes from the input file plus
/// [`CLIP_SUFFIX`], placed under the output directory when there is one.
/// With an explicit output file both name and extension come from it.
pub fn resolve_output_template(
    input: &Path,
    target: &OutputTarget,
) -> Result<OutputNameTemplate, DomainError> {
    match target {
        OutputTarget::Unspecified | OutputTarget::Directory(_) => {
            let (mut file_name, extension) = decompose(input)?;
            file_name.push(CLIP_SUFFIX);
            let base = match target {
                OutputTarget::Directory(dir) => dir.join(file_name),
                _ => file_name.into(),
            };
            Ok(OutputNameTemplate::new(base, extension))
        }
        OutputTarget::File(output) => {
            let (name, extension) = decompose(output)?;
            Ok(OutputNameTemplate::new(dir_name(output).join(name), extension))
        }
    }
}

fn decompose(path: &Path) -> Result<(OsString, OsString), DomainError> {
    let file_name = base_name(path);
    match split_file_name(file_name) {
        FileNameMatch::Matched { name, extension } => Ok((name, extension)),
        FileNameMatch::NoMatch => Err(DomainError::NameParse {
            name: file_name.to_string_lossy().into_owned(),
        }),
    }
}
