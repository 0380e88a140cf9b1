// src/filesystem/commands.rs
//!
//! Filesystem commands exposed to the front end.
//!
//! Thin wrappers over the plain functions in `walker` and `file_io`; the
//! behavior worth testing lives there. Every call is synchronous, blocking
//! file-system work that buffers its full result before returning.

use super::file_io;
use super::types::{DirectoryEntry, PathError};
use super::walker;

/// Read a file's contents as text
#[tauri::command]
pub async fn read_file_contents(path: String) -> Result<String, PathError> {
    file_io::read_file_text(&path)
}

/// Recursively list every file and directory beneath a root path
#[tauri::command]
pub async fn list_directory(path: String) -> Result<Vec<DirectoryEntry>, PathError> {
    walker::list_directory(&path)
}

/// Get metadata for a single file or directory
#[tauri::command]
pub async fn get_file_info(path: String) -> Result<DirectoryEntry, PathError> {
    file_io::stat_path(&path)
}
