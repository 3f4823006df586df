// Warn on redundant path prefixes (e.g., std::path::Path when Path is imported)
#![warn(unused_qualifications)]
// Use log::* macros instead of println!/eprintln! for proper log level control
#![deny(clippy::print_stdout, clippy::print_stderr)]

mod capture;
mod commands;
mod ignore_poison;
pub mod licensing;
pub mod overlay;
mod settings;

use tauri::Manager;

use crate::licensing::LicenseVerifier;
use crate::overlay::OverlayState;
use crate::overlay::geometry::DEFAULT_SIZE;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .plugin(tauri_plugin_process::init())
        .setup(|app| {
            // Initialize logging - respects RUST_LOG env var (default: info)
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .format_timestamp_millis()
                .init();

            // A bad embedded public key is a build defect; fail launch, not
            // every activation attempt.
            app.manage(LicenseVerifier::from_embedded_key()?);

            // First run centers the ring on the primary monitor
            let fallback_center = app
                .get_webview_window("main")
                .and_then(|w| w.primary_monitor().ok().flatten())
                .map(|monitor| {
                    let size = monitor.size().to_logical::<f64>(monitor.scale_factor());
                    (size.width / 2.0, size.height / 2.0)
                })
                .unwrap_or((DEFAULT_SIZE, DEFAULT_SIZE));

            let geometry = settings::load_ring_geometry(app.handle(), fallback_center);
            log::debug!(
                "Ring restored at ({}, {}) size {}",
                geometry.center_x,
                geometry.center_y,
                geometry.size
            );
            app.manage(OverlayState::new(geometry));

            capture::exclude_overlay_from_capture(app);

            overlay::router::start_router(app.handle());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::licensing::get_license_status,
            commands::licensing::increment_use_count,
            commands::licensing::activate_license,
            commands::licensing::should_show_nag,
            commands::overlay::pointer_down,
            commands::overlay::pointer_moved,
            commands::overlay::pointer_up,
            commands::overlay::resize_ring,
            commands::overlay::nudge_ring,
            commands::overlay::get_ring_geometry,
            commands::overlay::update_ui_regions,
            commands::settings::get_display_settings,
            commands::settings::set_display_settings
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
