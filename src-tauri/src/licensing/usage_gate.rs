//! Persistent trial-usage counter and licensed/unlicensed state machine.
//!
//! State lives in the `license.json` store managed by tauri-plugin-store.
//! The counter is kept in the same user-writable local storage as everything
//! else: clearing it resets the trial. That is accepted behavior (soft trial,
//! not DRM), so there is no hidden enforcement anywhere.

use serde::Serialize;
use tauri_plugin_store::StoreExt;

use crate::licensing::{LicenseError, LicenseVerifier};

/// Number of launches before the nag prompt appears.
pub const MAX_FREE_USES: u32 = 10;

const STORE_FILE: &str = "license.json";

/// Store keys for persisted usage state.
const STORE_KEY_USE_COUNT: &str = "use_count";
const STORE_KEY_LICENSED: &str = "licensed";
const STORE_KEY_LICENSED_EMAIL: &str = "licensed_email";
const STORE_KEY_LICENSE_KEY: &str = "license_key";

/// Observable license state, derived from the persisted counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LicenseStatus {
    /// Unlicensed with free uses left.
    #[serde(rename_all = "camelCase")]
    Trial { remaining: u32, use_count: u32 },
    /// Unlicensed and out of free uses; the nag prompt should show.
    #[serde(rename_all = "camelCase")]
    TrialExpired { use_count: u32 },
    /// Permanently licensed.
    Licensed { email: String },
}

/// Persisted usage state. Mutations go through the methods below so every
/// observable transition stays atomic from the caller's perspective.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageData {
    pub use_count: u32,
    pub licensed: bool,
    pub licensed_email: Option<String>,
    pub license_key: Option<String>,
}

impl UsageData {
    /// Counts one application launch. Licensed installs stop counting.
    /// Returns true if the counter changed (the caller persists then).
    pub fn record_launch(&mut self) -> bool {
        if self.licensed {
            return false;
        }
        self.use_count += 1;
        true
    }

    /// Free uses left before the nag appears, never negative.
    pub fn remaining(&self) -> u32 {
        MAX_FREE_USES.saturating_sub(self.use_count)
    }

    pub fn status(&self) -> LicenseStatus {
        if self.licensed {
            LicenseStatus::Licensed {
                email: self.licensed_email.clone().unwrap_or_default(),
            }
        } else if self.use_count >= MAX_FREE_USES {
            LicenseStatus::TrialExpired {
                use_count: self.use_count,
            }
        } else {
            LicenseStatus::Trial {
                remaining: self.remaining(),
                use_count: self.use_count,
            }
        }
    }

    /// Records a successful activation. Idempotent: activating again (with
    /// the same or a different valid key) while already licensed keeps the
    /// original email, and `licensed` never flips back to false.
    pub fn apply_activation(&mut self, email: &str, license_key: &str) {
        if self.licensed {
            return;
        }
        self.licensed = true;
        self.licensed_email = Some(email.to_string());
        self.license_key = Some(license_key.to_string());
    }

    pub fn should_show_nag(&self) -> bool {
        matches!(self.status(), LicenseStatus::TrialExpired { .. })
    }
}

fn load(app: &tauri::AppHandle) -> UsageData {
    let store = match app.store(STORE_FILE) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Could not open license store, treating as first run: {}", e);
            return UsageData::default();
        }
    };

    UsageData {
        use_count: store
            .get(STORE_KEY_USE_COUNT)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0),
        licensed: store.get(STORE_KEY_LICENSED).and_then(|v| v.as_bool()).unwrap_or(false),
        licensed_email: store
            .get(STORE_KEY_LICENSED_EMAIL)
            .and_then(|v| v.as_str().map(str::to_string)),
        license_key: store
            .get(STORE_KEY_LICENSE_KEY)
            .and_then(|v| v.as_str().map(str::to_string)),
    }
}

/// Writes the full usage snapshot. Writes are idempotent snapshots, so
/// redundant saves are harmless.
fn save(app: &tauri::AppHandle, data: &UsageData) {
    let store = match app.store(STORE_FILE) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Could not open license store for writing: {}", e);
            return;
        }
    };

    store.set(STORE_KEY_USE_COUNT, serde_json::json!(data.use_count));
    store.set(STORE_KEY_LICENSED, serde_json::json!(data.licensed));
    if let Some(email) = &data.licensed_email {
        store.set(STORE_KEY_LICENSED_EMAIL, serde_json::json!(email));
    }
    if let Some(key) = &data.license_key {
        store.set(STORE_KEY_LICENSE_KEY, serde_json::json!(key));
    }
}

/// Current `(licensed, use_count, max_free_uses)` without counting a launch.
pub fn usage_snapshot(app: &tauri::AppHandle) -> (bool, u32, u32) {
    let data = load(app);
    (data.licensed, data.use_count, MAX_FREE_USES)
}

/// Counts this launch (once per app start, invoked by the frontend on load)
/// and returns the updated snapshot.
pub fn record_launch(app: &tauri::AppHandle) -> (bool, u32, u32) {
    let mut data = load(app);
    if data.record_launch() {
        save(app, &data);
        log::info!("Trial launch {} of {}", data.use_count, MAX_FREE_USES);
    }
    (data.licensed, data.use_count, MAX_FREE_USES)
}

/// Verifies a license key and, on success, transitions to `Licensed`
/// permanently. Any verification failure leaves the persisted state
/// untouched.
pub fn activate(app: &tauri::AppHandle, verifier: &LicenseVerifier, license_key: &str) -> Result<String, LicenseError> {
    let email = verifier.verify(license_key)?;

    let mut data = load(app);
    if data.licensed {
        // Already licensed: re-activation is a no-op success.
        return Ok(data.licensed_email.unwrap_or(email));
    }
    data.apply_activation(&email, license_key.trim());
    save(app, &data);

    log::info!("License activated for {}", email);
    Ok(email)
}

/// Whether the reminder prompt should show on this launch.
pub fn should_show_nag(app: &tauri::AppHandle) -> bool {
    load(app).should_show_nag()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_counter_is_monotonic() {
        let mut data = UsageData::default();
        for launch in 1..=15u32 {
            assert!(data.record_launch());
            assert_eq!(data.use_count, launch);
            assert_eq!(data.remaining(), MAX_FREE_USES.saturating_sub(launch));
        }
        // Never negative
        assert_eq!(data.remaining(), 0);
    }

    #[test]
    fn test_status_progression() {
        let mut data = UsageData::default();
        data.record_launch();
        assert_eq!(
            data.status(),
            LicenseStatus::Trial {
                remaining: MAX_FREE_USES - 1,
                use_count: 1
            }
        );

        while data.use_count < MAX_FREE_USES {
            data.record_launch();
        }
        assert_eq!(
            data.status(),
            LicenseStatus::TrialExpired {
                use_count: MAX_FREE_USES
            }
        );
        assert!(data.should_show_nag());
    }

    #[test]
    fn test_nag_not_shown_during_trial() {
        let mut data = UsageData::default();
        for _ in 0..MAX_FREE_USES - 1 {
            data.record_launch();
        }
        assert!(!data.should_show_nag());
    }

    #[test]
    fn test_licensed_installs_stop_counting() {
        let mut data = UsageData::default();
        data.record_launch();
        data.apply_activation("buyer@example.com", "key");

        let count_before = data.use_count;
        assert!(!data.record_launch());
        assert!(!data.record_launch());
        assert_eq!(data.use_count, count_before);
        assert!(!data.should_show_nag());
    }

    #[test]
    fn test_activation_is_idempotent_and_sticky() {
        let mut data = UsageData::default();
        data.apply_activation("first@example.com", "key-1");
        assert!(data.licensed);

        // A second activation with a different valid key changes nothing
        data.apply_activation("second@example.com", "key-2");
        assert_eq!(data.licensed_email.as_deref(), Some("first@example.com"));
        assert_eq!(data.license_key.as_deref(), Some("key-1"));
        assert!(data.licensed);
    }

    #[test]
    fn test_activation_after_expiry_clears_nag() {
        let mut data = UsageData::default();
        for _ in 0..MAX_FREE_USES + 3 {
            data.record_launch();
        }
        assert!(data.should_show_nag());

        data.apply_activation("buyer@example.com", "key");
        assert!(!data.should_show_nag());
        assert_eq!(
            data.status(),
            LicenseStatus::Licensed {
                email: "buyer@example.com".to_string()
            }
        );
    }

    #[test]
    fn test_status_serialization() {
        let status = LicenseStatus::Trial {
            remaining: 7,
            use_count: 3,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"type\":\"trial\""), "JSON: {}", json);
        assert!(json.contains("\"remaining\":7"), "JSON: {}", json);
        assert!(json.contains("\"useCount\":3"), "JSON: {}", json);

        let status = LicenseStatus::Licensed {
            email: "buyer@example.com".to_string(),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"type\":\"licensed\""), "JSON: {}", json);
    }
}
