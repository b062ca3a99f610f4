//! Form payload validation.
//!
//! Consent first, then the required fields. The email check is the
//! native-input equivalent: one `@` with non-empty sides and no
//! whitespace, nothing stricter.

use leadline_core::{Error, FormPayload, Result};

/// Validates a submitted payload; the first failure wins.
pub fn validate_payload(payload: &FormPayload) -> Result<()> {
    if !payload.consent_given {
        return Err(Error::validation_field(
            "consent",
            "consent to the privacy policy is required",
        ));
    }
    for (field, value) in [
        ("name", &payload.name),
        ("email", &payload.email),
        ("phone", &payload.phone),
    ] {
        if value.trim().is_empty() {
            return Err(Error::validation_field(field, "must not be empty"));
        }
    }
    if !is_plausible_email(payload.email.trim()) {
        return Err(Error::validation_field(
            "email",
            "must look like an email address",
        ));
    }
    Ok(())
}

/// Native-email-input equivalent plausibility check.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    match parts.next() {
        Some(domain) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
