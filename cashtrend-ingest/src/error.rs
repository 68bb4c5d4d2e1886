//! Errors raised while loading a balance series

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },
}

impl LoadError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        LoadError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
