//! Unique identifier type for lead records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a lead record.
///
/// Rendered as `lead_<unix-millis>_<8-hex-suffix>`: a time-based prefix
/// so ids sort roughly by creation order, plus a random suffix so two
/// leads created within the same millisecond still get distinct ids.
/// Uniqueness is per-ledger only; there is no external enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    /// Generates a fresh lead id from the current wall clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use leadline_core::LeadId;
    ///
    /// let id = LeadId::generate();
    /// assert!(id.as_str().starts_with("lead_"));
    /// ```
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("lead_{millis}_{}", &suffix[..8]))
    }

    /// Wraps an existing id string (e.g. one read back from storage).
    pub fn from_string<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for LeadId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
