pub mod dialogs;
pub mod filesystem;

pub use filesystem::{DirectoryEntry, PathError};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            dialogs::commands::open_file_dialog,
            dialogs::commands::open_directory_dialog,
            filesystem::commands::read_file_contents,
            filesystem::commands::list_directory,
            filesystem::commands::get_file_info,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
