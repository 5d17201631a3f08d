//! Error types for verbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::version::BumpKind;

/// Errors from version parsing and bumping.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid bump kind '{0}'. Accepted values are: major, minor, patch, build")]
    InvalidBumpKind(String),

    #[error("Failed to parse version '{input}': {reason}")]
    Format { input: String, reason: String },

    #[error("Cannot apply a {kind} bump to '{version}': it has no build component")]
    UnsupportedBump { kind: BumpKind, version: String },

    #[error("Cannot bump the {field} field of '{version}': it is already at its maximum")]
    Overflow {
        field: &'static str,
        version: String,
    },
}

/// Errors from version file access.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read version file {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write version file {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Version(#[from] VersionError),
}
