//! Error types for license verification and activation.

/// Why a license key was rejected.
///
/// Every variant surfaces as a message in the activation UI and leaves the
/// persisted usage state untouched; activation is all-or-nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum LicenseError {
    /// The user submitted an empty key.
    EmptyInput,
    /// The outer base64/JSON envelope could not be decoded.
    MalformedToken,
    /// The cryptographic signature check failed.
    InvalidSignature,
    /// The signed payload does not parse to the expected shape.
    MalformedPayload,
    /// A validly signed token, but for a different product.
    WrongProduct,
}

impl LicenseError {
    /// Returns a user-friendly message for the activation dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter a license key.".to_string(),
            Self::MalformedToken => {
                "Invalid license key format. Make sure you pasted the whole key from your email.".to_string()
            }
            Self::InvalidSignature => "Invalid license key. Check for missing or extra characters.".to_string(),
            Self::MalformedPayload => "Invalid license key. Check for missing or extra characters.".to_string(),
            Self::WrongProduct => "This license key is for a different product.".to_string(),
        }
    }
}

impl std::fmt::Display for LicenseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty license key"),
            Self::MalformedToken => write!(f, "malformed license token"),
            Self::InvalidSignature => write!(f, "invalid license signature"),
            Self::MalformedPayload => write!(f, "malformed license payload"),
            Self::WrongProduct => write!(f, "license is for a different product"),
        }
    }
}

impl std::error::Error for LicenseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(LicenseError::EmptyInput.to_string(), "empty license key");
        assert_eq!(LicenseError::InvalidSignature.to_string(), "invalid license signature");
        assert_eq!(
            LicenseError::WrongProduct.to_string(),
            "license is for a different product"
        );
    }

    #[test]
    fn test_error_serialization() {
        let json = serde_json::to_string(&LicenseError::MalformedToken).unwrap();
        assert!(json.contains("\"type\":\"malformedToken\""), "JSON: {}", json);

        let json = serde_json::to_string(&LicenseError::WrongProduct).unwrap();
        assert!(json.contains("\"type\":\"wrongProduct\""), "JSON: {}", json);
    }

    #[test]
    fn test_all_variants_have_user_messages() {
        let errors = [
            LicenseError::EmptyInput,
            LicenseError::MalformedToken,
            LicenseError::InvalidSignature,
            LicenseError::MalformedPayload,
            LicenseError::WrongProduct,
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_empty_input_user_message() {
        assert!(LicenseError::EmptyInput.user_message().contains("enter"));
    }
}
