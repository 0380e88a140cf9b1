// src/filesystem/walker.rs
//!
//! Recursive directory traversal.
//!
//! Walks an entire tree in one pass and materializes a flat entry list for
//! the front end's file browser. Partial results beat total failure here: a
//! descendant we cannot stat or enter is skipped and the walk continues, so
//! one unreadable subdirectory never blanks the whole tree view.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::types::{DirectoryEntry, PathError};

/// List every file and directory beneath `root`, depth-first.
///
/// The root itself is not part of the result. A bad root (missing, not a
/// directory, unreadable) fails the whole call; failures on individual
/// descendants are absorbed and those entries are left out.
pub fn list_directory(root: &str) -> Result<Vec<DirectoryEntry>, PathError> {
    let root_ref = Path::new(root);

    if !root_ref.exists() {
        return Err(PathError::NotFound {
            path: root.to_string(),
        });
    }

    if !root_ref.is_dir() {
        return Err(PathError::NotADirectory {
            path: root.to_string(),
        });
    }

    // The walk below swallows per-entry errors, so probe the root explicitly:
    // an unenterable root must fail the call, not return an empty listing.
    fs::read_dir(root_ref).map_err(|e| PathError::from_io(root, e))?;

    let mut entries = Vec::new();

    for result in WalkDir::new(root_ref).min_depth(1).follow_links(false) {
        let entry = match result {
            Ok(entry) => entry,
            // Unreadable descendant, skip and keep walking the siblings.
            Err(_) => continue,
        };

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };

        entries.push(DirectoryEntry::from_metadata(entry.path(), &metadata));
    }

    Ok(entries)
}
