//! Tauri commands for licensing and trial state.

use tauri::State;

use crate::licensing::{self, LicenseVerifier};

/// Current `(licensed, use_count, max_free_uses)` without counting a launch.
#[tauri::command]
pub fn get_license_status(app: tauri::AppHandle) -> (bool, u32, u32) {
    licensing::usage_snapshot(&app)
}

/// Counts this application launch (frontend calls this once on load) and
/// returns the updated `(licensed, use_count, max_free_uses)`.
#[tauri::command]
pub fn increment_use_count(app: tauri::AppHandle) -> (bool, u32, u32) {
    licensing::record_launch(&app)
}

/// Verifies a pasted license key and activates it. Returns the purchaser
/// email on success, or a user-facing message on rejection.
#[tauri::command]
pub fn activate_license(
    app: tauri::AppHandle,
    verifier: State<'_, LicenseVerifier>,
    license_key: String,
) -> Result<String, String> {
    licensing::activate(&app, &verifier, &license_key).map_err(|e| {
        log::info!("License activation rejected: {}", e);
        e.user_message()
    })
}

/// Whether the trial reminder should show on this launch.
#[tauri::command]
pub fn should_show_nag(app: tauri::AppHandle) -> bool {
    licensing::should_show_nag(&app)
}
