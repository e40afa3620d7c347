//! Error types for the pipeline.

use std::path::PathBuf;

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum ChatCloudError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid normalizer resource {}:{line}: {reason}", .path.display())]
    NormalizerResource {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("invalid emoji class: {0}")]
    EmojiClass(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ChatCloudError {
    /// Wraps an I/O error with the path it occurred on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatCloudError>;
