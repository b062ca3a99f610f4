//! The capture flow: one submission, end to end.

use crate::message::format_handoff_message;
use crate::validate::validate_payload;
use chrono::Utc;
use leadline_core::{FormPayload, LeadId, LeadRecord, Result};
use leadline_handoff::Handoff;
use leadline_ledger::{Ledger, LedgerStore};
use leadline_remote::MirrorClient;
use tracing::{info, warn};

/// What a successful submission produced.
///
/// The form reset itself is the caller's concern; a returned outcome
/// means the payload was accepted and the fields can be cleared.
#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    /// The record appended to the local ledger
    pub record: LeadRecord,
    /// The formatted hand-off message
    pub handoff_message: String,
    /// The deep link embedding the message
    pub handoff_link: String,
    /// Whether a mirror write was attempted (not whether it landed)
    pub mirrored: bool,
}

/// Orchestrates validation, persistence, mirroring, and hand-off.
pub struct CaptureFlow<S: LedgerStore> {
    ledger: Ledger<S>,
    handoff: Handoff,
    mirror: Option<MirrorClient>,
    user_agent: String,
    launch_links: bool,
}

impl<S: LedgerStore> CaptureFlow<S> {
    /// Creates a capture flow over the given ledger and hand-off
    /// destination. The mirror is optional; `None` means
    /// local-ledger-only mode.
    pub fn new(ledger: Ledger<S>, handoff: Handoff, mirror: Option<MirrorClient>) -> Self {
        Self {
            ledger,
            handoff,
            mirror,
            user_agent: default_user_agent(),
            launch_links: true,
        }
    }

    /// Overrides the captured client-environment string.
    pub fn with_user_agent<U: Into<String>>(mut self, user_agent: U) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Disables launching the hand-off link (the link is still built
    /// and returned). Used by tests and the CLI's `--no-open`.
    pub fn without_launch(mut self) -> Self {
        self.launch_links = false;
        self
    }

    /// Read access to the underlying ledger.
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    /// Runs one submission through the flow.
    ///
    /// Only validation failures (missing consent, empty or implausible
    /// required fields) reject the submission; nothing is written and
    /// no hand-off fires in that case. Once validation passes, a
    /// ledger-append failure cannot abort the flow, the mirror write
    /// runs fire-and-forget, and the hand-off is launched with no
    /// result channel.
    ///
    /// Must be called from within a tokio runtime when a mirror is
    /// configured or link launching is enabled.
    pub fn submit(&self, payload: FormPayload) -> Result<CaptureOutcome> {
        validate_payload(&payload)?;

        let record = LeadRecord {
            id: LeadId::generate(),
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            condition: payload.condition,
            message: payload.message,
            timestamp: Utc::now(),
            user_agent: self.user_agent.clone(),
        };

        // Best-effort local write; failures are logged inside.
        self.ledger.append(record.clone());

        let mirrored = self.mirror.is_some();
        if let Some(client) = &self.mirror {
            let client = client.clone();
            let mirror_record = record.clone();
            tokio::spawn(async move {
                if let Err(err) = client.create(&mirror_record).await {
                    warn!(id = %mirror_record.id, %err, "mirror write dropped");
                }
            });
        }

        let handoff_message = format_handoff_message(&record);
        let handoff_link = self.handoff.link_for(&handoff_message);
        if self.launch_links {
            self.handoff.open(&handoff_message);
        }

        info!(id = %record.id, mirrored, "lead captured");
        Ok(CaptureOutcome {
            record,
            handoff_message,
            handoff_link,
            mirrored,
        })
    }
}

/// Best-effort client environment string, informational only.
fn default_user_agent() -> String {
    format!(
        "leadline/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
