//! Shared overlay state managed by Tauri.
//!
//! One struct owns everything the router and the pointer commands touch:
//! ring geometry, visible UI rectangles, and the interaction state machine.
//! Commands and the router task run on different threads under Tauri, so the
//! state sits behind a mutex; every mutation happens inside a single lock
//! scope, which keeps geometry updates atomic with respect to router reads.

use std::sync::Mutex;

use crate::ignore_poison::IgnorePoison;
use crate::overlay::geometry::{RingGeometry, UiRegion};
use crate::overlay::interaction::InteractionState;

/// Everything behind the lock.
pub struct Overlay {
    pub geometry: RingGeometry,
    pub ui_regions: Vec<UiRegion>,
    pub interaction: InteractionState,
}

/// Managed via `app.manage()`; see `lib.rs`.
pub struct OverlayState {
    inner: Mutex<Overlay>,
}

impl OverlayState {
    pub fn new(geometry: RingGeometry) -> Self {
        Self {
            inner: Mutex::new(Overlay {
                geometry,
                ui_regions: Vec::new(),
                interaction: InteractionState::Idle,
            }),
        }
    }

    /// Runs a closure under the lock. All reads and mutations go through
    /// here so callers can't observe a partially-updated overlay.
    pub fn with<T>(&self, f: impl FnOnce(&mut Overlay) -> T) -> T {
        let mut guard = self.inner.lock_ignore_poison();
        f(&mut guard)
    }

    /// Snapshot of the inputs the router hit-tests against.
    pub fn router_snapshot(&self) -> (RingGeometry, Vec<UiRegion>) {
        let guard = self.inner.lock_ignore_poison();
        (guard.geometry, guard.ui_regions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_mutation() {
        let state = OverlayState::new(RingGeometry::new(100.0, 100.0, 400.0));
        state.with(|overlay| overlay.geometry.set_center(250.0, 300.0));

        let (geometry, regions) = state.router_snapshot();
        assert_eq!((geometry.center_x, geometry.center_y), (250.0, 300.0));
        assert!(regions.is_empty());
    }

    #[test]
    fn test_ui_regions_round_trip() {
        let state = OverlayState::new(RingGeometry::default());
        state.with(|overlay| {
            overlay.ui_regions = vec![UiRegion {
                x: 0.0,
                y: 0.0,
                width: 300.0,
                height: 200.0,
            }]
        });
        let (_, regions) = state.router_snapshot();
        assert_eq!(regions.len(), 1);
        assert!(regions[0].contains(150.0, 100.0));
    }
}
