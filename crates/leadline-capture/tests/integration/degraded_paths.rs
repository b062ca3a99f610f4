//! Submissions under degraded storage and mirror conditions.

use crate::common::{failing_storage_flow, unreachable_mirror_flow, valid_payload};
use std::time::Duration;

#[tokio::test]
async fn test_storage_failure_never_aborts_the_flow() {
    let flow = failing_storage_flow();

    let outcome = flow
        .submit(valid_payload())
        .expect("flow proceeds despite storage failure");

    // The record was dropped locally but the hand-off still formed.
    assert!(flow.ledger().list_all().is_empty());
    assert!(outcome.handoff_message.contains("Name: Priya"));
}

#[tokio::test]
async fn test_unreachable_mirror_is_fire_and_forget() {
    let flow = unreachable_mirror_flow();

    let outcome = flow
        .submit(valid_payload())
        .expect("mirror failure never blocks the flow");
    assert!(outcome.mirrored, "a write was attempted");

    // Give the spawned write time to fail; the ledger record stays.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(flow.ledger().list_all().len(), 1);
}

#[tokio::test]
async fn test_local_only_mode_attempts_no_mirror_write() {
    let flow = crate::common::memory_flow();
    let outcome = flow.submit(valid_payload()).expect("accepted");
    assert!(!outcome.mirrored);
}
