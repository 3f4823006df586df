//! Server-side license issuance.
//!
//! Lives in the client crate so the issuer binary and the verifier share one
//! definition of the payload and envelope formats. The app itself never holds
//! a private key; only the `ringlite-issue-license` tool constructs this.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use ed25519_dalek::{Signer, SigningKey};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::licensing::{LicenseEnvelope, LicensePayload, PRODUCT_ID};

/// Signs license payloads with the deployment's private key.
pub struct LicenseIssuer {
    signing_key: SigningKey,
}

impl LicenseIssuer {
    /// Loads the private key from its PKCS#8 PEM form.
    ///
    /// An absent or malformed key is a configuration error raised here, at
    /// startup of whatever runs the issuer; `issue` itself cannot fail on it.
    pub fn from_pkcs8_pem(pem: &str) -> Result<Self, String> {
        use ed25519_dalek::pkcs8::DecodePrivateKey;
        let signing_key =
            SigningKey::from_pkcs8_pem(pem).map_err(|e| format!("Invalid license private key: {}", e))?;
        Ok(Self { signing_key })
    }

    /// Wraps an already-loaded signing key (used by tests).
    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Issues a license key for a purchaser email.
    ///
    /// The payload is serialized exactly once; the signature covers the raw
    /// bytes of that text, and the same text travels verbatim inside the
    /// envelope so the verifier checks the identical byte sequence.
    pub fn issue(&self, email: &str) -> Result<String, serde_json::Error> {
        let payload = LicensePayload {
            email: email.to_string(),
            timestamp: current_timestamp_ms(),
            product: PRODUCT_ID.to_string(),
        };
        let payload_text = serde_json::to_string(&payload)?;

        let signature = self.signing_key.sign(payload_text.as_bytes());
        let envelope = LicenseEnvelope {
            payload: payload_text,
            signature: STANDARD.encode(signature.to_bytes()),
        };

        // Base64 over the whole JSON envelope for easy copy/paste delivery
        Ok(STANDARD.encode(serde_json::to_string(&envelope)?))
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    fn test_issuer() -> LicenseIssuer {
        LicenseIssuer::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    #[test]
    fn test_issued_key_is_valid_base64_json_envelope() {
        let key = test_issuer().issue("buyer@example.com").unwrap();
        let decoded = STANDARD.decode(&key).unwrap();
        let envelope: LicenseEnvelope = serde_json::from_slice(&decoded).unwrap();
        assert!(!envelope.payload.is_empty());
        // Ed25519 signatures are 64 bytes
        assert_eq!(STANDARD.decode(&envelope.signature).unwrap().len(), 64);
    }

    #[test]
    fn test_payload_carries_email_product_and_timestamp() {
        let before = current_timestamp_ms();
        let key = test_issuer().issue("buyer@example.com").unwrap();
        let after = current_timestamp_ms();

        let decoded = STANDARD.decode(&key).unwrap();
        let envelope: LicenseEnvelope = serde_json::from_slice(&decoded).unwrap();
        let payload: LicensePayload = serde_json::from_str(&envelope.payload).unwrap();

        assert_eq!(payload.email, "buyer@example.com");
        assert_eq!(payload.product, PRODUCT_ID);
        assert!(payload.timestamp >= before && payload.timestamp <= after);
    }

    #[test]
    fn test_from_pkcs8_pem_rejects_garbage() {
        assert!(LicenseIssuer::from_pkcs8_pem("not a pem").is_err());
        assert!(LicenseIssuer::from_pkcs8_pem("").is_err());
    }
}
