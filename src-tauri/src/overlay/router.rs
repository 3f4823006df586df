//! Click-through routing for the overlay window.
//!
//! The window must swallow pointer events over the ring and its UI surfaces
//! and pass them through everywhere else. Window input filtering can't do
//! per-pixel shapes, so a periodic task polls the global cursor position
//! (which works even while the window ignores pointer events) and toggles
//! the window's ignore-cursor-events flag on hit-test transitions.

use std::time::Duration;

use tauri::Manager;
use tokio::time::MissedTickBehavior;

use crate::overlay::OverlayState;
use crate::overlay::geometry::{RingGeometry, UiRegion};

/// ~60 Hz; the same cadence the renderer works at.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Whether the overlay window currently accepts pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    Capturing,
    Ignoring,
}

/// Pure decision core of the router: tracks the last applied mode and
/// reports only actual transitions. Toggling the window mode is a relatively
/// expensive OS call, and redundant toggles risk flicker and races with
/// in-flight changes, so unchanged ticks produce no work.
pub struct RouterCore {
    mode: PointerMode,
}

impl RouterCore {
    /// The window starts out ignoring pointer events (set once before the
    /// loop begins), so that is the initial committed mode.
    pub fn new() -> Self {
        Self {
            mode: PointerMode::Ignoring,
        }
    }

    /// Computes the mode the window should be in for this cursor position.
    pub fn desired_mode(cursor: (f64, f64), geometry: &RingGeometry, regions: &[UiRegion]) -> PointerMode {
        let (x, y) = cursor;
        if geometry.contains(x, y) || regions.iter().any(|r| r.contains(x, y)) {
            PointerMode::Capturing
        } else {
            PointerMode::Ignoring
        }
    }

    /// Returns the mode to apply, or None when nothing changed. A failed
    /// cursor query (None) skips the tick entirely. The transition is not
    /// recorded until `commit` confirms the OS call went through, so a
    /// failed toggle is retried on the next tick.
    pub fn transition(
        &self,
        cursor: Option<(f64, f64)>,
        geometry: &RingGeometry,
        regions: &[UiRegion],
    ) -> Option<PointerMode> {
        let cursor = cursor?;
        let desired = Self::desired_mode(cursor, geometry, regions);
        (desired != self.mode).then_some(desired)
    }

    pub fn commit(&mut self, mode: PointerMode) {
        self.mode = mode;
    }
}

impl Default for RouterCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the routing loop on the Tauri async runtime. Called once from
/// setup, after `OverlayState` is managed.
pub fn start_router(app: &tauri::AppHandle) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        run_router(app).await;
    });
}

async fn run_router(app: tauri::AppHandle) {
    // Start click-through everywhere; the first over-ring tick flips it.
    if let Some(window) = app.get_webview_window("main") {
        if let Err(e) = window.set_ignore_cursor_events(true) {
            log::warn!("Could not enable initial click-through: {}", e);
        }
    }

    let mut core = RouterCore::new();
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    // A tick still in flight when its deadline passes is skipped, never
    // queued, so ticks cannot pile up or overlap.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log::debug!("Click-through router started");

    loop {
        interval.tick().await;

        let cursor = query_cursor(&app);
        let (geometry, regions) = app.state::<OverlayState>().router_snapshot();

        let Some(mode) = core.transition(cursor, &geometry, &regions) else {
            continue;
        };

        let Some(window) = app.get_webview_window("main") else {
            continue;
        };
        match window.set_ignore_cursor_events(mode == PointerMode::Ignoring) {
            Ok(()) => core.commit(mode),
            // Transient OS error: leave the committed mode alone and retry
            // the toggle on a later tick.
            Err(e) => log::trace!("Pointer mode toggle failed, will retry: {}", e),
        }
    }
}

/// Global cursor position in logical coordinates. The overlay window sits at
/// the screen origin, so screen coordinates line up with window coordinates.
/// Returns None on a transient query failure; the caller skips that tick.
fn query_cursor(app: &tauri::AppHandle) -> Option<(f64, f64)> {
    let position = match app.cursor_position() {
        Ok(p) => p,
        Err(e) => {
            log::trace!("Cursor query failed: {}", e);
            return None;
        }
    };
    let scale = app
        .get_webview_window("main")
        .and_then(|w| w.scale_factor().ok())
        .unwrap_or(1.0);
    let logical = position.to_logical::<f64>(scale);
    Some((logical.x, logical.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> RingGeometry {
        RingGeometry::new(500.0, 500.0, 400.0)
    }

    const OVER_RING: Option<(f64, f64)> = Some((500.0, 270.0));
    const OFF_RING: Option<(f64, f64)> = Some((500.0, 100.0));

    #[test]
    fn test_desired_mode_over_ring() {
        assert_eq!(RouterCore::desired_mode((500.0, 270.0), &ring(), &[]), PointerMode::Capturing);
        assert_eq!(RouterCore::desired_mode((500.0, 100.0), &ring(), &[]), PointerMode::Ignoring);
    }

    #[test]
    fn test_desired_mode_over_ui_region() {
        let modal = UiRegion {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 200.0,
        };
        // Off the ring but on the modal
        assert_eq!(
            RouterCore::desired_mode((150.0, 100.0), &ring(), &[modal]),
            PointerMode::Capturing
        );
    }

    #[test]
    fn test_stationary_cursor_toggles_at_most_once() {
        let mut core = RouterCore::new();
        let geometry = ring();

        let mut toggles = 0;
        for _ in 0..50 {
            if let Some(mode) = core.transition(OVER_RING, &geometry, &[]) {
                core.commit(mode);
                toggles += 1;
            }
        }
        assert_eq!(toggles, 1);
    }

    #[test]
    fn test_transition_fires_on_each_crossing() {
        let mut core = RouterCore::new();
        let geometry = ring();

        assert_eq!(core.transition(OVER_RING, &geometry, &[]), Some(PointerMode::Capturing));
        core.commit(PointerMode::Capturing);

        assert_eq!(core.transition(OFF_RING, &geometry, &[]), Some(PointerMode::Ignoring));
        core.commit(PointerMode::Ignoring);

        assert_eq!(core.transition(OFF_RING, &geometry, &[]), None);
    }

    #[test]
    fn test_failed_cursor_query_skips_tick() {
        let mut core = RouterCore::new();
        let geometry = ring();

        assert_eq!(core.transition(None, &geometry, &[]), None);

        // A failure between two good ticks doesn't lose the transition
        core.commit(PointerMode::Capturing);
        assert_eq!(core.transition(None, &geometry, &[]), None);
        assert_eq!(core.transition(OFF_RING, &geometry, &[]), Some(PointerMode::Ignoring));
    }

    #[test]
    fn test_uncommitted_transition_is_retried() {
        // If the OS toggle fails, commit is never called and the same
        // transition comes back on the next tick.
        let core = RouterCore::new();
        let geometry = ring();

        assert_eq!(core.transition(OVER_RING, &geometry, &[]), Some(PointerMode::Capturing));
        assert_eq!(core.transition(OVER_RING, &geometry, &[]), Some(PointerMode::Capturing));
    }

    #[test]
    fn test_geometry_change_reroutes_next_tick() {
        let mut core = RouterCore::new();
        let mut geometry = ring();

        assert_eq!(core.transition(OVER_RING, &geometry, &[]), Some(PointerMode::Capturing));
        core.commit(PointerMode::Capturing);

        // Ring dragged away: same cursor is now off-ring
        geometry.set_center(1200.0, 1200.0);
        assert_eq!(core.transition(OVER_RING, &geometry, &[]), Some(PointerMode::Ignoring));
    }
}
