// Local filesystem adapter - File system queries through tokio::fs

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
#[derive(Debug, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    /// Any path that cannot be inspected (missing, unreadable parent, a file
    /// in the middle of the path) is not a directory.
    async fn directory_exists(&self, path: &Path) -> Result<bool, DomainError> {
        Ok(tokio::fs::metadata(path)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false))
    }
}
