//! Transcoder command line construction

use std::ffi::OsString;

use crate::domain::model::ClipRequest;

/// Only fatal transcoder messages reach the terminal
pub const TRANSCODER_LOG_LEVEL: &str = "fatal";

/// Argument list for one clip extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscoderCommand {
    args: Vec<OsString>,
}

impl TranscoderCommand {
    /// Build the command line for `request`.
    ///
    /// Order is fixed: input and seek window, then stream copy, then stream
    /// suppression, then the overwrite policy, then the output path.
    pub fn build(program: &str, request: &ClipRequest) -> Self {
        let mut args: Vec<OsString> = vec![
            program.into(),
            "-loglevel".into(),
            TRANSCODER_LOG_LEVEL.into(),
            "-i".into(),
            request.input.clone().into_os_string(),
            "-ss".into(),
            request.start.as_str().into(),
            "-to".into(),
            request.end.as_str().into(),
        ];

        let flags = &request.flags;
        if flags.copy {
            args.push("-c".into());
            args.push("copy".into());
        }
        if flags.no_audio {
            args.push("-an".into());
        }
        if flags.no_video {
            args.push("-vn".into());
        }
        args.push(if flags.overwrite { "-y" } else { "-n" }.into());
        args.push(request.output.clone().into_os_string());

        Self { args }
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}
