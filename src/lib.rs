mod commands;
mod data;
mod error;
mod models;
mod remote_path;
mod services;
mod state;

#[cfg(test)]
mod test_support;

use commands::{browser_commands, editor_commands, settings_commands};
use data::migrations;
use state::{AppState, BrowserState, EditorDraft};
use std::sync::Mutex;

use tauri::Manager;

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn init_db(app: &tauri::App) -> Result<rusqlite::Connection, Box<dyn std::error::Error>> {
    let app_dir = app.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    let db_path = app_dir.join("svfs.db");
    let conn = rusqlite::Connection::open(&db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    migrations::run_migrations(&conn)?;
    tracing::info!("settings database at {}", db_path.display());
    Ok(conn)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let conn = init_db(app)?;
            app.manage(AppState {
                db: Mutex::new(conn),
                browser: Mutex::new(BrowserState::default()),
                editor: Mutex::new(EditorDraft::default()),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            browser_commands::get_state,
            browser_commands::load_directory,
            browser_commands::navigate_into,
            browser_commands::navigate_to_root,
            browser_commands::sort_by,
            editor_commands::create_file,
            editor_commands::create_folder,
            editor_commands::open_for_edit,
            editor_commands::update_file,
            editor_commands::delete_file,
            editor_commands::cancel_edit,
            settings_commands::get_setting,
            settings_commands::set_setting,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
