//! Ring geometry and hit-testing.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE: f64 = 400.0;
pub const MIN_SIZE: f64 = 100.0;
pub const MAX_SIZE: f64 = 1600.0;
/// Size change per wheel/keyboard resize step.
pub const SIZE_STEP: f64 = 20.0;
/// Center movement per arrow-key nudge.
pub const NUDGE_STEP: f64 = 10.0;
/// Extra margin around the rendered stroke so the capture region covers the
/// glow, which is drawn slightly wider than the ring itself.
pub const GLOW_PADDING: f64 = 30.0;

const MIN_THICKNESS: f64 = 10.0;
const MAX_THICKNESS: f64 = 100.0;

/// Position and size of the ring, in logical screen coordinates.
///
/// Owned by the interaction state machine; the click-through router reads a
/// snapshot every poll tick. Thickness is always derived from size, so the
/// struct can never hold a torn combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub size: f64,
    pub thickness: f64,
}

impl RingGeometry {
    /// Creates a geometry with the size clamped and thickness derived.
    pub fn new(center_x: f64, center_y: f64, size: f64) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            center_x,
            center_y,
            size,
            thickness: thickness_for(size),
        }
    }

    pub fn outer_radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() - self.thickness
    }

    /// Grows or shrinks the ring by `delta`, clamped to `[MIN_SIZE, MAX_SIZE]`,
    /// and recomputes the thickness.
    pub fn resize_by(&mut self, delta: f64) {
        self.size = (self.size + delta).clamp(MIN_SIZE, MAX_SIZE);
        self.thickness = thickness_for(self.size);
    }

    /// Moves the center by the given offsets.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center_x += dx;
        self.center_y += dy;
    }

    pub fn set_center(&mut self, x: f64, y: f64) {
        self.center_x = x;
        self.center_y = y;
    }

    /// Annulus hit-test: true iff the point's distance from the center lies
    /// within `[inner_radius - GLOW_PADDING, outer_radius + GLOW_PADDING]`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        distance <= self.outer_radius() + GLOW_PADDING && distance >= self.inner_radius() - GLOW_PADDING
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_SIZE)
    }
}

fn thickness_for(size: f64) -> f64 {
    (size * 0.1).clamp(MIN_THICKNESS, MAX_THICKNESS)
}

/// Screen rectangle of a visible UI surface (help panel, license modal).
/// The frontend reports these so the router can keep pointer capture on
/// while the cursor is over them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl UiRegion {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}
