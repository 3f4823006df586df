//! Tauri commands for display preferences.

use crate::settings::{self, DisplaySettings};

/// Persisted display preferences (dim level, color temperature).
#[tauri::command]
pub fn get_display_settings(app: tauri::AppHandle) -> DisplaySettings {
    settings::load_display_settings(&app)
}

/// Persists updated display preferences.
#[tauri::command]
pub fn set_display_settings(app: tauri::AppHandle, display: DisplaySettings) {
    settings::save_display_settings(&app, &display);
}
