//! Settings Commands

use tauri::State;

use crate::domain::Settings;
use crate::AppState;

#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<Settings, String> {
    state.settings_repo.load().await.map_err(|e| {
        log::error!("get_settings failed: {}", e);
        e.to_string()
    })
}

#[tauri::command]
pub async fn save_settings(settings: Settings, state: State<'_, AppState>) -> Result<Settings, String> {
    let saved = state.settings_repo.save(&settings).await.map_err(|e| e.to_string())?;
    log::info!(
        "settings saved: auto-save every {}s, list colour {}",
        saved.auto_save_interval_secs,
        saved.new_list_default_color
    );
    Ok(saved)
}
