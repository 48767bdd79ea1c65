//! Error types for the audit pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a folder or the whole run.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("destination {}: {message}", path.display())]
    Destination { path: PathBuf, message: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("writing report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serializing report: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        AuditError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
