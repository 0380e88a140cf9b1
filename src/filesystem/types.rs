// src/filesystem/types.rs
//!
//! Wire types and errors shared by the filesystem commands.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use ts_rs::TS;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Path not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("I/O error: {reason}")]
    IoError { reason: String },
}

impl PathError {
    /// Classify an I/O failure on a known path.
    pub fn from_io(path: &str, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => PathError::NotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => PathError::PermissionDenied {
                path: path.to_string(),
            },
            _ => PathError::IoError {
                reason: format!("'{}': {}", path, e),
            },
        }
    }
}

impl Serialize for PathError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// Types
// ============================================================================

/// One file or directory discovered by a traversal or a single-path stat.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// Entry name (final path component, not full path)
    pub name: String,
    /// Full path
    pub path: String,
    /// True if this is a directory
    pub is_dir: bool,
    /// File size in bytes (0 for directories)
    pub size: u64,
    /// Last modified time, RFC 3339 (empty if the platform cannot report one)
    pub mod_time: String,
}

impl DirectoryEntry {
    /// Project already-fetched metadata into an entry.
    pub fn from_metadata(path: &Path, metadata: &fs::Metadata) -> Self {
        let path_str = path.to_string_lossy().to_string();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path_str.clone());

        DirectoryEntry {
            name,
            path: path_str,
            is_dir: metadata.is_dir(),
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            mod_time: format_mod_time(metadata),
        }
    }
}

fn format_mod_time(metadata: &fs::Metadata) -> String {
    metadata
        .modified()
        .ok()
        .map(OffsetDateTime::from)
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_default()
}
