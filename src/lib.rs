//! multiclip library
//!
//! Extracts time-bounded clips from a media file by delegating the media work
//! to an external transcoder. The library validates start/end timestamp
//! pairs, derives numbered output names and runs one transcoder process per
//! clip, strictly in sequence.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{ClipJob, ClipReport, ClipRequest, Flags, OutputNameTemplate, ProcessExit};
