//! Screen-capture exclusion for the overlay window.
//!
//! The ring is a lighting aid; it should illuminate the user's face without
//! showing up in recordings or screen shares. macOS and Windows both expose
//! a per-window flag for this; Linux compositors have no equivalent.

#[cfg(target_os = "macos")]
mod macos {
    use objc2::msg_send;
    use objc2::runtime::AnyObject;

    // NSWindowSharingNone from the NSWindowSharingType enum
    const NS_WINDOW_SHARING_NONE: usize = 0;

    /// Safety: `ns_window` must be a valid NSWindow pointer obtained from Tauri.
    pub unsafe fn exclude_from_capture(ns_window: *mut AnyObject) {
        unsafe {
            let _: () = msg_send![&*ns_window, setSharingType: NS_WINDOW_SHARING_NONE];
        }
    }
}

#[cfg(target_os = "windows")]
mod windows_impl {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{SetWindowDisplayAffinity, WDA_EXCLUDEFROMCAPTURE};

    pub fn exclude_from_capture(hwnd: isize) {
        unsafe {
            if let Err(e) = SetWindowDisplayAffinity(HWND(hwnd as *mut _), WDA_EXCLUDEFROMCAPTURE) {
                log::warn!("SetWindowDisplayAffinity failed: {}", e);
            }
        }
    }
}

/// Marks the overlay window as excluded from screen capture. Called once
/// from setup; a failure is logged and otherwise ignored, since the overlay
/// works fine either way.
pub fn exclude_overlay_from_capture(app: &tauri::App) {
    use tauri::Manager;

    let Some(window) = app.get_webview_window("main") else {
        log::warn!("No main window to exclude from capture");
        return;
    };

    #[cfg(target_os = "macos")]
    {
        match window.ns_window() {
            Ok(ns_window) => {
                unsafe { macos::exclude_from_capture(ns_window.cast()) };
                log::info!("macOS: window excluded from screen capture");
            }
            Err(e) => log::warn!("Could not get NSWindow handle: {}", e),
        }
    }

    #[cfg(target_os = "windows")]
    {
        match window.hwnd() {
            Ok(hwnd) => {
                windows_impl::exclude_from_capture(hwnd.0 as isize);
                log::info!("Windows: window excluded from screen capture");
            }
            Err(e) => log::warn!("Could not get window handle: {}", e),
        }
    }

    #[cfg(target_os = "linux")]
    {
        let _ = window;
        log::info!("Linux: screen capture exclusion not supported");
    }
}
