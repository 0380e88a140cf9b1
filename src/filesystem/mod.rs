// src/filesystem/mod.rs
//!
//! Filesystem Module
//!
//! Read-only filesystem operations backing the file browser and editor
//! panes: recursive directory listing, single-path stat, whole-file reads.
//! Native picker dialogs live in dialogs/.

pub mod commands;
pub mod file_io;
pub mod types;
pub mod walker;


pub use types::{DirectoryEntry, PathError};
