// src/dialogs/commands.rs
//!
//! Native file and directory picker commands.
//!
//! The window handle comes in as a command argument, never as ambient
//! process state, so these stay independent of the filesystem commands.
//! Cancellation is `None`, not an error; the returned path is not validated
//! here and callers re-check it (e.g. via `get_file_info`) before use.

use tauri::WebviewWindow;
use tauri_plugin_dialog::DialogExt;

/// Open a file selection dialog and return the chosen path
#[tauri::command]
pub async fn open_file_dialog(window: WebviewWindow) -> Option<String> {
    let selected = window
        .dialog()
        .file()
        .set_title("Select a file")
        .blocking_pick_file();

    selected.and_then(|p| p.as_path().map(|path| path.to_string_lossy().to_string()))
}

/// Open a directory selection dialog and return the chosen path
#[tauri::command]
pub async fn open_directory_dialog(window: WebviewWindow) -> Option<String> {
    let selected = window
        .dialog()
        .file()
        .set_title("Select a directory")
        .blocking_pick_folder();

    selected.and_then(|p| p.as_path().map(|path| path.to_string_lossy().to_string()))
}
