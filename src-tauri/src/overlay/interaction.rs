//! Drag, resize and nudge handling for the ring.
//!
//! The frontend forwards raw pointer/wheel/key events; the transitions here
//! are the actual logic, independent of how events are delivered. Committed
//! geometry changes are returned to the caller, which persists them and lets
//! the router pick the new geometry up on its next tick.

use crate::overlay::geometry::{NUDGE_STEP, RingGeometry, SIZE_STEP};
use crate::overlay::state::Overlay;

/// Pointer interaction state. Resizing is transient (one wheel event, no
/// held state), so only dragging needs to be tracked between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    Dragging {
        start_cursor: (f64, f64),
        start_center: (f64, f64),
    },
}

impl Overlay {
    /// Pointer-down on the overlay. Starts a drag iff the point is on the
    /// ring and no drag is in progress. Returns whether a drag began.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if self.interaction != InteractionState::Idle || !self.geometry.contains(x, y) {
            return false;
        }
        self.interaction = InteractionState::Dragging {
            start_cursor: (x, y),
            start_center: (self.geometry.center_x, self.geometry.center_y),
        };
        true
    }

    /// Pointer moved. While dragging, the center follows the cursor delta;
    /// returns the updated geometry for re-rendering. Not persisted until
    /// pointer-up.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Option<RingGeometry> {
        let InteractionState::Dragging {
            start_cursor,
            start_center,
        } = self.interaction
        else {
            return None;
        };
        self.geometry
            .set_center(start_center.0 + (x - start_cursor.0), start_center.1 + (y - start_cursor.1));
        Some(self.geometry)
    }

    /// Pointer released. Ends the drag and returns the geometry to commit,
    /// or None if no drag was in progress.
    pub fn pointer_up(&mut self) -> Option<RingGeometry> {
        if self.interaction == InteractionState::Idle {
            return None;
        }
        self.interaction = InteractionState::Idle;
        Some(self.geometry)
    }

    /// Wheel resize: one step per event, clamped; thickness is recomputed.
    /// Returns the geometry to commit immediately.
    pub fn resize(&mut self, steps: i32) -> RingGeometry {
        self.geometry.resize_by(f64::from(steps) * SIZE_STEP);
        self.geometry
    }

    /// Arrow-key nudge: moves the center one step per event. Returns the
    /// geometry to commit immediately.
    pub fn nudge(&mut self, dx: i32, dy: i32) -> RingGeometry {
        self.geometry
            .translate(f64::from(dx) * NUDGE_STEP, f64::from(dy) * NUDGE_STEP);
        self.geometry
    }
}
