//! Kanban Board Backend
//!
//! Layered architecture:
//! - domain: Projects, boards, settings and their validation
//! - repository: SQLite project store and the JSON settings file
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::Manager;

mod domain;
mod repository;
mod commands;

use repository::{init_db, DbState, SettingsRepository, SETTINGS_FILE};

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub settings_repo: SettingsRepository,
}

fn now() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

/// App data dir, created on first run
fn get_data_dir(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "KanbanBoard")
                .expect("failed to init rolling logger");

            let data_dir = get_data_dir(&app_handle)?;
            let db_path = data_dir.join("kanban.db");
            eprintln!("[{}] App setup starting, db at {}", now(), db_path.display());

            let db_state = tauri::async_runtime::block_on(init_db(&db_path)).map_err(|e| {
                let _ = rolling_logger::error(&format!("DB init failed: {}", e));
                e
            })?;
            let _ = rolling_logger::info("DB init success");
            eprintln!("[{}] DB initialized", now());

            app.manage(AppState {
                db_state,
                settings_repo: SettingsRepository::new(
                    data_dir.join(SETTINGS_FILE),
                ),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Projects
            commands::create_project,
            commands::list_projects,
            commands::get_project,
            commands::save_project,
            commands::delete_project,
            // Settings
            commands::get_settings,
            commands::save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
