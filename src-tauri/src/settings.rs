//! Persisted ring geometry and display preferences.
//!
//! Values live in the `settings.json` store managed by tauri-plugin-store.
//! Saves are full idempotent snapshots written on every committed mutation,
//! so no flush is needed on exit. Loading tolerates missing or malformed
//! entries and falls back to defaults.

use serde::{Deserialize, Serialize};
use tauri_plugin_store::StoreExt;

use crate::overlay::geometry::{DEFAULT_SIZE, RingGeometry};

const STORE_FILE: &str = "settings.json";

const STORE_KEY_RING_SIZE: &str = "ringSize";
const STORE_KEY_RING_X: &str = "ringX";
const STORE_KEY_RING_Y: &str = "ringY";
const STORE_KEY_DIM_LEVEL: &str = "dimLevel";
const STORE_KEY_COLOR_TEMPERATURE: &str = "colorTemperature";

/// Display preferences for the ring light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Brightness of the ring, 0.0 (off) to 1.0 (full).
    pub dim_level: f64,
    /// Color temperature in Kelvin.
    pub color_temperature: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dim_level: 1.0,
            color_temperature: 5600,
        }
    }
}

/// Loads the persisted ring geometry. Falls back to the default size
/// centered at `fallback_center` (the screen center) on first run, and
/// clamps an out-of-range persisted size back into bounds.
pub fn load_ring_geometry(app: &tauri::AppHandle, fallback_center: (f64, f64)) -> RingGeometry {
    let store = match app.store(STORE_FILE) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Could not open settings store, using defaults: {}", e);
            return RingGeometry::new(fallback_center.0, fallback_center.1, DEFAULT_SIZE);
        }
    };

    let size = store
        .get(STORE_KEY_RING_SIZE)
        .and_then(|v| v.as_f64())
        .unwrap_or(DEFAULT_SIZE);
    let center_x = store
        .get(STORE_KEY_RING_X)
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback_center.0);
    let center_y = store
        .get(STORE_KEY_RING_Y)
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback_center.1);

    RingGeometry::new(center_x, center_y, size)
}

/// Persists the committed ring geometry. Thickness is derived, not stored.
pub fn save_ring_geometry(app: &tauri::AppHandle, geometry: &RingGeometry) {
    let store = match app.store(STORE_FILE) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Could not open settings store for writing: {}", e);
            return;
        }
    };
    store.set(STORE_KEY_RING_SIZE, serde_json::json!(geometry.size));
    store.set(STORE_KEY_RING_X, serde_json::json!(geometry.center_x));
    store.set(STORE_KEY_RING_Y, serde_json::json!(geometry.center_y));
}

pub fn load_display_settings(app: &tauri::AppHandle) -> DisplaySettings {
    let defaults = DisplaySettings::default();
    let store = match app.store(STORE_FILE) {
        Ok(s) => s,
        Err(_) => return defaults,
    };

    DisplaySettings {
        dim_level: store
            .get(STORE_KEY_DIM_LEVEL)
            .and_then(|v| v.as_f64())
            .unwrap_or(defaults.dim_level),
        color_temperature: store
            .get(STORE_KEY_COLOR_TEMPERATURE)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(defaults.color_temperature),
    }
}

pub fn save_display_settings(app: &tauri::AppHandle, settings: &DisplaySettings) {
    let store = match app.store(STORE_FILE) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Could not open settings store for writing: {}", e);
            return;
        }
    };
    store.set(STORE_KEY_DIM_LEVEL, serde_json::json!(settings.dim_level));
    store.set(STORE_KEY_COLOR_TEMPERATURE, serde_json::json!(settings.color_temperature));
}
