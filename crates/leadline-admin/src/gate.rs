//! Cosmetic access gate for the admin commands.

use leadline_core::AdminConfig;

/// Plaintext password gate in front of the admin report.
///
/// Cosmetic only: it keeps the destructive commands from being run by
/// accident, nothing more. Anything that actually needs access control
/// belongs behind server-side authentication, which is out of scope
/// here.
#[derive(Debug, Clone)]
pub struct AccessGate {
    config: AdminConfig,
}

impl AccessGate {
    /// Creates a gate from the admin configuration.
    pub fn new(config: AdminConfig) -> Self {
        Self { config }
    }

    /// Checks a supplied password against the configured one.
    ///
    /// An unset password leaves the gate open.
    pub fn verify(&self, supplied: Option<&str>) -> bool {
        match self.config.password.as_deref() {
            None => true,
            Some(expected) => supplied == Some(expected),
        }
    }
}
