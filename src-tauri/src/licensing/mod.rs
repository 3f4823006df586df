//! License issuance, verification and trial-usage tracking.
//!
//! License keys are Ed25519-signed tokens verified fully offline; the public
//! key is embedded at compile time. The trial counter is a soft reminder, not
//! an enforcement lock: the ring keeps working regardless of license status.

mod errors;
mod issuer;
mod usage_gate;
mod verification;

pub use errors::LicenseError;
pub use issuer::LicenseIssuer;
pub use usage_gate::{LicenseStatus, MAX_FREE_USES, UsageData, activate, record_launch, should_show_nag, usage_snapshot};
pub use verification::LicenseVerifier;

use serde::{Deserialize, Serialize};

/// Product identifier baked into every license payload. Tokens signed for a
/// different product are rejected even when the signature itself is valid.
pub const PRODUCT_ID: &str = "ringlite-pro";

/// Data signed into the license key.
///
/// The issuer serializes this exactly once; the serialized text travels
/// verbatim inside the envelope and is the byte sequence the signature
/// covers. Verification never re-serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicensePayload {
    pub email: String,
    /// Issuance time in milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub product: String,
}

/// Transport envelope wrapping the signed payload text for copy/paste
/// delivery. The whole envelope is JSON-encoded and then base64-encoded
/// into the opaque key string handed to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseEnvelope {
    /// The exact payload text that was signed, carried verbatim.
    pub payload: String,
    /// Base64-encoded Ed25519 signature over `payload`.
    pub signature: String,
}
