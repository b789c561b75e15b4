//! Error types for pathls
//!
//! Two families:
//! - [`Failure`]: something went wrong with one path. Collected during the
//!   run and reported at the end; never stops the walk.
//! - [`ConfigError`]: the requested options cannot be honoured. Raised before
//!   any traversal starts.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A per-path problem recorded during a run.
#[derive(Error, Debug)]
pub enum Failure {
    /// The path could not be stat'ed.
    #[error("cannot access '{}': {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path is a directory but its contents could not be listed.
    #[error("cannot open directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An auxiliary list file could not be read.
    #[error("cannot read list '{}': {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Failure {
    /// The path this failure is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Access { path, .. } | Self::ReadDir { path, .. } | Self::List { path, .. } => {
                path
            }
        }
    }
}

/// Options that cannot be combined or parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot reverse an unsorted listing")]
    ReverseUnsorted,

    #[error("--json cannot be combined with --null")]
    JsonWithNull,

    #[error("invalid ignore pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid {flag} duration '{value}': {reason}")]
    InvalidDuration {
        flag: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_path() {
        let failure = Failure::Access {
            path: PathBuf::from("missing/thing"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let message = failure.to_string();
        assert!(message.starts_with("cannot access 'missing/thing': "));
        assert_eq!(failure.path(), &PathBuf::from("missing/thing"));
    }

    #[test]
    fn test_read_dir_message() {
        let failure = Failure::ReadDir {
            path: PathBuf::from("locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(failure.to_string().contains("cannot open directory 'locked'"));
    }
}
