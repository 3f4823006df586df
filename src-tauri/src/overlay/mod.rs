//! The ring overlay: geometry, pointer interaction, and click-through routing.

pub mod geometry;
pub mod interaction;
pub mod router;
pub mod state;

pub use geometry::{RingGeometry, UiRegion};
pub use state::OverlayState;
