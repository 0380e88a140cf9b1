// src/filesystem/file_io.rs
//!
//! Single-path file operations: whole-file reads and metadata lookups.

use std::fs;
use std::path::Path;

use super::types::{DirectoryEntry, PathError};

/// Stat a single path and project it into the common entry shape.
pub fn stat_path(path: &str) -> Result<DirectoryEntry, PathError> {
    let path_ref = Path::new(path);

    let metadata = fs::metadata(path_ref).map_err(|e| PathError::from_io(path, e))?;

    Ok(DirectoryEntry::from_metadata(path_ref, &metadata))
}

/// Read an entire file and return its bytes as text.
///
/// No encoding negotiation: valid UTF-8 passes through unmodified, anything
/// else is reinterpreted lossily. The front end only ever feeds this into a
/// text editor pane.
pub fn read_file_text(path: &str) -> Result<String, PathError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(PathError::NotFound {
            path: path.to_string(),
        });
    }

    if !path_ref.is_file() {
        return Err(PathError::NotAFile {
            path: path.to_string(),
        });
    }

    let bytes = fs::read(path_ref).map_err(|e| PathError::from_io(path, e))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
