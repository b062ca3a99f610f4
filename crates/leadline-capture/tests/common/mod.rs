//! Common test utilities for capture flow integration tests.

use leadline_capture::CaptureFlow;
use leadline_core::{Condition, FormPayload, RemoteMirrorConfig};
use leadline_handoff::Handoff;
use leadline_ledger::{Ledger, MemoryStore};
use leadline_remote::MirrorClient;

/// Clinic phone used across the tests, digits only.
pub const TEST_PHONE: &str = "917276861131";

/// Builds a flow over a fresh in-memory ledger, link launching off.
pub fn memory_flow() -> CaptureFlow<MemoryStore> {
    CaptureFlow::new(
        Ledger::new(MemoryStore::new()),
        test_handoff(),
        None,
    )
    .without_launch()
    .with_user_agent("leadline-tests/0")
}

/// Builds a flow whose ledger writes always fail.
pub fn failing_storage_flow() -> CaptureFlow<MemoryStore> {
    CaptureFlow::new(
        Ledger::new(MemoryStore::failing()),
        test_handoff(),
        None,
    )
    .without_launch()
}

/// Builds a flow with a mirror client pointed at an unreachable host.
pub fn unreachable_mirror_flow() -> CaptureFlow<MemoryStore> {
    let config = RemoteMirrorConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        project_id: "test".to_string(),
        api_key: "test".to_string(),
        collection: "contact_messages".to_string(),
    };
    let client = MirrorClient::new(config).expect("client builds without network");
    CaptureFlow::new(
        Ledger::new(MemoryStore::new()),
        test_handoff(),
        Some(client),
    )
    .without_launch()
}

/// A fully valid consenting payload.
pub fn valid_payload() -> FormPayload {
    FormPayload::new("Priya", "p@x.com", "+911234")
        .with_condition(Condition::Keratoconus)
        .with_consent()
}

fn test_handoff() -> Handoff {
    Handoff::new(TEST_PHONE).expect("test phone is digits only")
}
