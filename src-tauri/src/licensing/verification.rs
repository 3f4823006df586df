//! Offline license key verification.
//!
//! A license key is a base64-encoded JSON envelope carrying the exact payload
//! text that was signed plus its Ed25519 signature. Verification is a pure,
//! deterministic function of the key string and the embedded public key: no
//! network access, no expiry, no revocation list.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::licensing::{LicenseEnvelope, LicenseError, LicensePayload, PRODUCT_ID};

/// Public key for license verification (safe to embed in the app).
/// The matching private key lives only in the issuer's environment.
const PUBLIC_KEY_PEM: &str = r#"-----BEGIN PUBLIC KEY-----
MCowBQYDK2VwAyEA/zB2hOm8CL03USj+vw87fZYf/UOuVy45cQr/MZ6DWnw=
-----END PUBLIC KEY-----"#;

/// Holds the verifying key for license checks.
///
/// Constructed once at startup from the embedded PEM so that a bad embed
/// aborts launch instead of failing on every activation attempt.
pub struct LicenseVerifier {
    key: VerifyingKey,
}

impl LicenseVerifier {
    /// Parses the embedded SPKI PEM public key.
    pub fn from_embedded_key() -> Result<Self, String> {
        use ed25519_dalek::pkcs8::DecodePublicKey;
        let key = VerifyingKey::from_public_key_pem(PUBLIC_KEY_PEM)
            .map_err(|e| format!("Embedded license public key is invalid: {}", e))?;
        Ok(Self { key })
    }

    /// Creates a verifier for an arbitrary key (used by tests and tooling).
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Verifies a license key and returns the purchaser email on success.
    ///
    /// The signature is checked against the literal payload text carried in
    /// the envelope, never against a re-serialized copy: JSON re-encoding is
    /// not guaranteed to reproduce the signed bytes (field order, whitespace,
    /// number formatting).
    pub fn verify(&self, license_key: &str) -> Result<String, LicenseError> {
        let trimmed = license_key.trim();
        if trimmed.is_empty() {
            return Err(LicenseError::EmptyInput);
        }

        let decoded = STANDARD.decode(trimmed).map_err(|_| LicenseError::MalformedToken)?;
        let envelope: LicenseEnvelope =
            serde_json::from_slice(&decoded).map_err(|_| LicenseError::MalformedToken)?;

        let signature_bytes = STANDARD
            .decode(&envelope.signature)
            .map_err(|_| LicenseError::MalformedToken)?;
        let signature = Signature::from_slice(&signature_bytes).map_err(|_| LicenseError::MalformedToken)?;

        self.key
            .verify(envelope.payload.as_bytes(), &signature)
            .map_err(|_| LicenseError::InvalidSignature)?;

        // Only a signed payload gets parsed; shape errors past this point
        // mean the issuer produced something unexpected.
        let payload: LicensePayload =
            serde_json::from_str(&envelope.payload).map_err(|_| LicenseError::MalformedPayload)?;

        if payload.product != PRODUCT_ID {
            return Err(LicenseError::WrongProduct);
        }

        Ok(payload.email)
    }
}
