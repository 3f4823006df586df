//! Tauri commands for ring interaction.
//!
//! Thin wrappers over the interaction state machine. Commands that commit a
//! geometry change persist it before returning, so the stored snapshot and
//! the state the router reads never diverge for longer than one event.

use tauri::State;

use crate::overlay::{OverlayState, RingGeometry, UiRegion};
use crate::settings;

/// Pointer pressed at `(x, y)`. Returns true if a drag started.
#[tauri::command]
pub fn pointer_down(state: State<'_, OverlayState>, x: f64, y: f64) -> bool {
    state.with(|overlay| overlay.pointer_down(x, y))
}

/// Pointer moved. Returns the updated geometry while dragging, None otherwise.
#[tauri::command]
pub fn pointer_moved(state: State<'_, OverlayState>, x: f64, y: f64) -> Option<RingGeometry> {
    state.with(|overlay| overlay.pointer_moved(x, y))
}

/// Pointer released. Commits and persists the drag result, if any.
#[tauri::command]
pub fn pointer_up(app: tauri::AppHandle, state: State<'_, OverlayState>) -> Option<RingGeometry> {
    let committed = state.with(|overlay| overlay.pointer_up());
    if let Some(geometry) = committed {
        settings::save_ring_geometry(&app, &geometry);
    }
    committed
}

/// Wheel resize by whole steps (positive grows). Persists immediately.
#[tauri::command]
pub fn resize_ring(app: tauri::AppHandle, state: State<'_, OverlayState>, steps: i32) -> RingGeometry {
    let geometry = state.with(|overlay| overlay.resize(steps));
    settings::save_ring_geometry(&app, &geometry);
    geometry
}

/// Arrow-key nudge by whole steps per axis. Persists immediately.
#[tauri::command]
pub fn nudge_ring(app: tauri::AppHandle, state: State<'_, OverlayState>, dx: i32, dy: i32) -> RingGeometry {
    let geometry = state.with(|overlay| overlay.nudge(dx, dy));
    settings::save_ring_geometry(&app, &geometry);
    geometry
}

/// Current ring geometry, for initial render.
#[tauri::command]
pub fn get_ring_geometry(state: State<'_, OverlayState>) -> RingGeometry {
    state.with(|overlay| overlay.geometry)
}

/// Replaces the set of visible UI rectangles the router hit-tests against.
/// The frontend calls this whenever the help panel or license modal is
/// shown, hidden, or resized.
#[tauri::command]
pub fn update_ui_regions(state: State<'_, OverlayState>, regions: Vec<UiRegion>) {
    state.with(|overlay| overlay.ui_regions = regions);
}
