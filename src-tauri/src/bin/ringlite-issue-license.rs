//! License issuance tool.
//!
//! Run by the payment-completion pipeline after a purchase is verified: it
//! turns a purchaser email into a signed license key, which the pipeline
//! then emails to the buyer. The app never runs this; only the deployment
//! holding the private key does.
//!
//! Usage:
//!   ringlite-issue-license <email>
//!
//! Environment variables:
//!   RINGLITE_LICENSE_PRIVATE_KEY - Ed25519 private key, PKCS#8 PEM

use std::env;
use std::process::ExitCode;

use ringlite_lib::licensing::LicenseIssuer;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(email) = args.next() else {
        eprintln!("Usage: ringlite-issue-license <email>");
        return ExitCode::FAILURE;
    };
    if email.trim().is_empty() || !email.contains('@') {
        eprintln!("Refusing to issue a license for '{}': not an email address", email);
        return ExitCode::FAILURE;
    }

    let Ok(private_key_pem) = env::var("RINGLITE_LICENSE_PRIVATE_KEY") else {
        eprintln!("RINGLITE_LICENSE_PRIVATE_KEY is not set");
        return ExitCode::FAILURE;
    };

    let issuer = match LicenseIssuer::from_pkcs8_pem(&private_key_pem) {
        Ok(issuer) => issuer,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match issuer.issue(email.trim()) {
        Ok(license_key) => {
            println!("{}", license_key);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to issue license: {}", e);
            ExitCode::FAILURE
        }
    }
}
