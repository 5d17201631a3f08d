//! Plain-text version file access.
//!
//! The version lives alone in a text file, conventionally named `VERSION` at
//! the project root. Reads trim surrounding whitespace before parsing; writes
//! replace the whole file through a temp file in the same directory so a
//! failed write never leaves a truncated version behind.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::StoreError;
use crate::version::{BumpKind, Version};

/// Run the full flow against a version file: read, bump, write back.
///
/// Returns the next version. With `dry_run` set the write is skipped and the
/// file keeps its current content.
pub fn bump_version_file(
    path: &Path,
    kind: BumpKind,
    dry_run: bool,
) -> Result<Version, StoreError> {
    let current = read_version(path)?;
    let next = current.bump(kind)?;

    if dry_run {
        debug!(path = %path.display(), version = %next, "dry run, skipping write");
        return Ok(next);
    }

    write_version(path, &next)?;

    Ok(next)
}

/// Read and parse the current version from `path`.
pub fn read_version(path: &Path) -> Result<Version, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let trimmed = raw.trim();
    debug!(path = %path.display(), version = trimmed, "read version file");

    Ok(trimmed.parse()?)
}

/// Atomically replace the content of `path` with the formatted version.
pub fn write_version(path: &Path, version: &Version) -> Result<(), StoreError> {
    let write_failed = |e: std::io::Error| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    // NamedTempFile in the target's directory so persist() stays on one filesystem
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_failed)?;
    writeln!(tmp, "{}", version).map_err(write_failed)?;
    tmp.persist(path).map_err(|e| write_failed(e.error))?;

    debug!(path = %path.display(), version = %version, "wrote version file");

    Ok(())
}
