//! verbump - A CLI tool that bumps the version stored in a plain-text VERSION file.
//!
//! # Overview
//!
//! verbump reads the current version from a text file (conventionally named
//! `VERSION` at the project root), increments the requested field with a
//! cascading reset of the lower-order ones, and writes the result back.
//! Versions with and without a build counter are both supported:
//!
//! ```text
//! 1.0.0
//! 1.0.0+1
//! ```

pub mod error;
pub mod store;
pub mod version;

// Re-export commonly used types
pub use error::{StoreError, VersionError};
pub use store::{bump_version_file, read_version, write_version};
pub use version::{BumpKind, Version};
