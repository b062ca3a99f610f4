//! Lead records and the form payload they are built from.

use super::ids::LeadId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal used wherever an absent condition is rendered.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Literal used wherever an absent free-text message is rendered.
pub const NO_MESSAGE: &str = "No additional message";

/// Closed set of condition labels a lead can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// Keratoconus
    Keratoconus,
    /// Post-surgery complications
    PostSurgery,
    /// Irregular cornea
    IrregularCornea,
    /// Other corneal issue
    Other,
}

impl Condition {
    /// Stable kebab-case label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Keratoconus => "keratoconus",
            Condition::PostSurgery => "post-surgery",
            Condition::IrregularCornea => "irregular-cornea",
            Condition::Other => "other",
        }
    }

    /// Renders an optional condition, falling back to [`NOT_SPECIFIED`].
    pub fn label_or_unspecified(condition: Option<&Condition>) -> &str {
        condition.map_or(NOT_SPECIFIED, Condition::as_str)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Condition {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "keratoconus" => Ok(Condition::Keratoconus),
            "post-surgery" => Ok(Condition::PostSurgery),
            "irregular-cornea" => Ok(Condition::IrregularCornea),
            "other" => Ok(Condition::Other),
            _ => Err(crate::Error::validation_field(
                "condition",
                format!("unknown condition label: {s}"),
            )),
        }
    }
}

/// A captured lead: one successful contact-form submission.
///
/// Created exactly once by the capture flow and never mutated afterwards.
/// Destroyed only by the retention sweep or a bulk clear of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Unique id within the ledger
    pub id: LeadId,
    /// Submitter's full name
    pub name: String,
    /// Submitter's email address
    pub email: String,
    /// Submitter's phone number, as entered
    pub phone: String,
    /// Selected condition, if any
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Free-text message, if any
    #[serde(default)]
    pub message: Option<String>,
    /// Creation time, set once
    pub timestamp: DateTime<Utc>,
    /// Best-effort client environment string, informational only
    #[serde(default)]
    pub user_agent: String,
}

impl LeadRecord {
    /// Whole days elapsed between this record's creation and `now`.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.timestamp).num_days()
    }

    /// Condition label for display, with the unspecified fallback.
    pub fn condition_label(&self) -> &str {
        Condition::label_or_unspecified(self.condition.as_ref())
    }

    /// Message text for display, with the no-message fallback.
    pub fn message_or_default(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => NO_MESSAGE,
        }
    }
}

/// The raw contact-form payload submitted to the capture flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPayload {
    /// Full name (required, non-empty)
    pub name: String,
    /// Email address (required, must look like an email)
    pub email: String,
    /// Phone number (required, non-empty)
    pub phone: String,
    /// Selected condition, if any
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Free-text message, if any
    #[serde(default)]
    pub message: Option<String>,
    /// Whether the submitter agreed to the privacy policy
    pub consent_given: bool,
}

impl FormPayload {
    /// Convenience constructor for the required fields; the optional
    /// fields start empty and consent starts withheld.
    pub fn new<N, E, P>(name: N, email: E, phone: P) -> Self
    where
        N: Into<String>,
        E: Into<String>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            condition: None,
            message: None,
            consent_given: false,
        }
    }

    /// Sets the condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Sets the free-text message.
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Marks consent as given.
    pub fn with_consent(mut self) -> Self {
        self.consent_given = true;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_record() -> LeadRecord {
        LeadRecord {
            id: LeadId::from_string("lead_0_00000000"),
            name: "Priya".to_string(),
            email: "p@x.com".to_string(),
            phone: "+911234".to_string(),
            condition: Some(Condition::Keratoconus),
            message: None,
            timestamp: Utc::now(),
            user_agent: "test".to_string(),
        }
    }

    #[test]
    fn test_condition_labels() {
        assert_eq!(Condition::Keratoconus.to_string(), "keratoconus");
        assert_eq!(Condition::PostSurgery.to_string(), "post-surgery");
        assert_eq!(Condition::IrregularCornea.to_string(), "irregular-cornea");
        assert_eq!(Condition::Other.to_string(), "other");
    }

    #[test]
    fn test_condition_parse_roundtrip() {
        for label in ["keratoconus", "post-surgery", "irregular-cornea", "other"] {
            let c: Condition = label.parse().unwrap();
            assert_eq!(c.as_str(), label);
        }
        assert!("astigmatism".parse::<Condition>().is_err());
    }

    #[test]
    fn test_condition_serde_matches_label() {
        let json = serde_json::to_string(&Condition::IrregularCornea).unwrap();
        assert_eq!(json, "\"irregular-cornea\"");
    }

    #[test]
    fn test_label_or_unspecified() {
        assert_eq!(
            Condition::label_or_unspecified(Some(&Condition::Other)),
            "other"
        );
        assert_eq!(Condition::label_or_unspecified(None), NOT_SPECIFIED);
    }

    #[test]
    fn test_record_display_fallbacks() {
        let mut record = sample_record();
        assert_eq!(record.condition_label(), "keratoconus");
        assert_eq!(record.message_or_default(), NO_MESSAGE);

        record.condition = None;
        record.message = Some(String::new());
        assert_eq!(record.condition_label(), NOT_SPECIFIED);
        assert_eq!(record.message_or_default(), NO_MESSAGE);

        record.message = Some("please call".to_string());
        assert_eq!(record.message_or_default(), "please call");
    }

    #[test]
    fn test_record_age_days() {
        let mut record = sample_record();
        let now = Utc::now();
        record.timestamp = now - chrono::Duration::days(31);
        assert_eq!(record.age_days(now), 31);
        record.timestamp = now - chrono::Duration::hours(12);
        assert_eq!(record.age_days(now), 0);
    }

    #[test]
    fn test_record_serde_roundtrip_with_missing_optionals() {
        // Stored payloads may omit the optional fields entirely.
        let json = r#"{
            "id": "lead_1_abcdef01",
            "name": "A",
            "email": "a@b.c",
            "phone": "1",
            "timestamp": "2026-01-02T03:04:05Z"
        }"#;
        let record: LeadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.condition, None);
        assert_eq!(record.message, None);
        assert_eq!(record.user_agent, "");
    }

    #[test]
    fn test_payload_builder() {
        let payload = FormPayload::new("Priya", "p@x.com", "+911234")
            .with_condition(Condition::Keratoconus)
            .with_message("hello")
            .with_consent();
        assert!(payload.consent_given);
        assert_eq!(payload.condition, Some(Condition::Keratoconus));
        assert_eq!(payload.message.as_deref(), Some("hello"));
    }
}
