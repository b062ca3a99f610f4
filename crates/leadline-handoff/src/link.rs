//! Deep-link construction and the browser opener.

use leadline_core::{Error, Result};
use tracing::{debug, warn};

/// Chat-service host the deep link targets.
const CHAT_HOST: &str = "https://wa.me";

/// Builds a pre-filled chat deep link.
///
/// `phone` is the destination number in E.164 form without the leading
/// `+` (digits only); `message` is percent-encoded into the `text`
/// query parameter.
///
/// # Examples
///
/// ```
/// use leadline_handoff::build_link;
///
/// let url = build_link("917276861131", "Hello there").unwrap();
/// assert_eq!(url, "https://wa.me/917276861131?text=Hello%20there");
/// ```
pub fn build_link(phone: &str, message: &str) -> Result<String> {
    if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::validation_field(
            "phone",
            "hand-off phone must be E.164 digits without the plus sign",
        ));
    }
    Ok(format!(
        "{CHAT_HOST}/{phone}?text={}",
        urlencoding::encode(message)
    ))
}

/// Hand-off destination bound to one clinic phone number.
#[derive(Debug, Clone)]
pub struct Handoff {
    phone: String,
}

impl Handoff {
    /// Creates a hand-off for the given destination number.
    ///
    /// The number is validated once here so later link building cannot
    /// fail on it.
    pub fn new<S: Into<String>>(phone: S) -> Result<Self> {
        let phone = phone.into();
        build_link(&phone, "")?;
        Ok(Self { phone })
    }

    /// The destination phone number (digits only).
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Builds the deep link for a message without opening it.
    pub fn link_for(&self, message: &str) -> String {
        // Phone was validated in the constructor.
        build_link(&self.phone, message).unwrap_or_default()
    }

    /// Opens the deep link in the system browser, fire-and-forget.
    ///
    /// Returns immediately; the launch runs on a blocking task with no
    /// result channel. A refused launch (headless host, no browser) is
    /// logged at `warn` inside the task and never surfaced. Callers
    /// must not depend on the outcome.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open(&self, message: &str) {
        let url = self.link_for(message);
        debug!(%url, "launching hand-off link");
        tokio::task::spawn_blocking(move || {
            if let Err(err) = webbrowser::open(&url) {
                warn!(%err, "hand-off link could not be opened");
            }
        });
    }
}
