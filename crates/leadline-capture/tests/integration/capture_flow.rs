//! Happy-path submissions through the capture flow.

use crate::common::{memory_flow, valid_payload, TEST_PHONE};
use leadline_core::FormPayload;

#[tokio::test]
async fn test_submission_creates_one_record_with_unique_id() {
    let flow = memory_flow();

    let outcome = flow.submit(valid_payload()).expect("submission accepted");

    let all = flow.ledger().list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, outcome.record.id);
    assert!(all[0].id.as_str().starts_with("lead_"));
    assert_eq!(all[0].user_agent, "leadline-tests/0");
}

#[tokio::test]
async fn test_two_submissions_two_distinct_ids() {
    let flow = memory_flow();

    let first = flow.submit(valid_payload()).expect("first accepted");
    let second = flow.submit(valid_payload()).expect("second accepted");

    assert_ne!(first.record.id, second.record.id);
    assert_eq!(flow.ledger().list_all().len(), 2);
}

#[tokio::test]
async fn test_handoff_message_carries_lead_details() {
    let flow = memory_flow();

    let outcome = flow
        .submit(valid_payload().with_message(""))
        .expect("submission accepted");

    assert!(outcome.handoff_message.contains("Name: Priya"));
    assert!(outcome.handoff_message.contains("Condition: keratoconus"));
    assert!(outcome
        .handoff_message
        .contains("Message: No additional message"));
    assert!(outcome
        .handoff_link
        .starts_with(&format!("https://wa.me/{TEST_PHONE}?text=")));
    // The link body is percent-encoded.
    assert!(!outcome.handoff_link.contains(' '));
}

#[tokio::test]
async fn test_withheld_consent_blocks_everything() {
    let flow = memory_flow();

    let mut payload = valid_payload();
    payload.consent_given = false;

    let err = flow.submit(payload).expect_err("consent gate rejects");
    assert!(err.is_user_facing());
    assert!(flow.ledger().list_all().is_empty());
}

#[tokio::test]
async fn test_required_field_validation_blocks_submission() {
    let flow = memory_flow();

    let payload = FormPayload::new("Priya", "not-an-email", "+911234").with_consent();
    let err = flow.submit(payload).expect_err("bad email rejected");
    assert!(err.to_string().contains("email"));
    assert!(flow.ledger().list_all().is_empty());
}

#[tokio::test]
async fn test_stats_follow_submissions() {
    let flow = memory_flow();
    flow.submit(valid_payload()).expect("accepted");
    flow.submit(valid_payload()).expect("accepted");

    let stats = flow.ledger().compute_stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.count_today, 2);
    assert_eq!(stats.count_this_week, 2);
    assert_eq!(stats.top_conditions[0].condition, "keratoconus");
    assert_eq!(stats.top_conditions[0].count, 2);
    assert!(stats.most_recent.is_some());
}
