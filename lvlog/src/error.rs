//! # Logger Error Types
//!
//! Centralized error definitions for the lvlog crate.
//! Only opening, closing and configuring the logger can fail; the log call
//! itself never reports an error.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for logger operations.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to open log file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to close log sink: {source}")]
    Close {
        #[source]
        source: std::io::Error,
    },

    #[error("Log sink is already closed")]
    AlreadyClosed,

    #[error("Invalid log level: '{value}' (expected debug, notice, warning or fatal)")]
    InvalidLevel { value: String },

    #[error("Failed to load config from {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Failed to install tracing subscriber: {reason}")]
    Subscriber { reason: String },
}

impl LogError {
    /// Underlying I/O error kind, when the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            LogError::Open { source, .. } | LogError::Close { source } => Some(source.kind()),
            _ => None,
        }
    }
}
