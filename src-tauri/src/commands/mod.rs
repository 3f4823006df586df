//! Tauri commands module.

pub mod licensing;
pub mod overlay;
pub mod settings;
