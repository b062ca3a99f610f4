//! Environment-driven configuration.
//!
//! No process-wide singletons: configuration is read once at startup and
//! passed into constructors explicitly. A missing remote-mirror key set
//! is not an error; it selects local-ledger-only mode.

use tracing::warn;

/// Environment variable holding the mirror API base URL.
pub const ENV_MIRROR_BASE_URL: &str = "LEADLINE_MIRROR_BASE_URL";
/// Environment variable holding the mirror project id.
pub const ENV_MIRROR_PROJECT_ID: &str = "LEADLINE_MIRROR_PROJECT_ID";
/// Environment variable holding the mirror API key.
pub const ENV_MIRROR_API_KEY: &str = "LEADLINE_MIRROR_API_KEY";
/// Environment variable overriding the mirror collection name.
pub const ENV_MIRROR_COLLECTION: &str = "LEADLINE_MIRROR_COLLECTION";
/// Environment variable holding the admin access password.
pub const ENV_ADMIN_PASSWORD: &str = "LEADLINE_ADMIN_PASSWORD";

/// Default document collection receiving mirrored leads.
pub const DEFAULT_COLLECTION: &str = "contact_messages";

/// Connection settings for the remote mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMirrorConfig {
    /// Base URL of the document-collection API
    pub base_url: String,
    /// Project the collection lives under
    pub project_id: String,
    /// Bearer token for the API
    pub api_key: String,
    /// Collection name receiving mirrored leads
    pub collection: String,
}

impl RemoteMirrorConfig {
    /// Reads the mirror configuration from the process environment.
    ///
    /// Returns `None` when any required key is absent, logging which
    /// keys are missing; callers then run in local-ledger-only mode.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the mirror configuration through an arbitrary lookup.
    ///
    /// Split out from [`from_env`](Self::from_env) so tests can supply
    /// key sets without touching process-global state.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = [ENV_MIRROR_BASE_URL, ENV_MIRROR_PROJECT_ID, ENV_MIRROR_API_KEY];
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| lookup(key).as_deref().is_none_or(str::is_empty))
            .collect();
        if !missing.is_empty() {
            warn!(
                missing = missing.join(", "),
                "remote mirror not configured; running local-ledger-only"
            );
            return None;
        }

        Some(Self {
            base_url: lookup(ENV_MIRROR_BASE_URL)?,
            project_id: lookup(ENV_MIRROR_PROJECT_ID)?,
            api_key: lookup(ENV_MIRROR_API_KEY)?,
            collection: lookup(ENV_MIRROR_COLLECTION)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
        })
    }
}

/// Settings for the admin report's cosmetic access gate.
///
/// A plaintext comparison only. This is not a security boundary; it
/// exists so the report commands are not triggered by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminConfig {
    /// Expected password; `None` leaves the gate open
    pub password: Option<String>,
}

impl AdminConfig {
    /// Reads the admin configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            password: std::env::var(ENV_ADMIN_PASSWORD)
                .ok()
                .filter(|p| !p.is_empty()),
        }
    }

    /// Builds a config with an explicit password.
    pub fn with_password<S: Into<String>>(password: S) -> Self {
        Self {
            password: Some(password.into()),
        }
    }
}
