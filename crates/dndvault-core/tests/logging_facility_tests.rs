#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::aria;
use dndvault_core::diff::DiffEngine;
use dndvault_core::errors::{ExErrorKind, VaultError};
use dndvault_core::logging_facility::test_capture::init_test_capture;
use dndvault_core::{log_op_end, log_op_error, log_op_start, parse_character_bytes};
use dndvault_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use dndvault_core_types::{RequestContext, RequestId};
use serde_json::json;
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    assert_eq!(capture.lifecycle(op_name, EVENT_START).len(), 1);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.lifecycle(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = VaultError::MissingField {
        field: "name".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.lifecycle(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].field("err_code"),
        Some(ExErrorKind::MissingField.code())
    );
}

#[test]
fn test_compute_changes_emits_one_start_and_one_end() {
    let capture = init_test_capture();
    let request_id = RequestId::from_string("req-compute-changes-4".to_string());
    let ctx = RequestContext::with_request_id(request_id.clone()).with_guild_id("guild-1");

    let baseline = aria();
    let mut candidate = aria();
    candidate.name = "Aria Stormwind".to_string();
    DiffEngine::default().compute_in(&ctx, &baseline, &candidate);

    let ours = capture.correlated("compute_changes", "request_id", request_id.as_str());

    let starts = ours
        .iter()
        .filter(|e| e.event() == Some(EVENT_START))
        .count();
    let ends: Vec<_> = ours
        .iter()
        .filter(|e| e.event() == Some(EVENT_END))
        .collect();

    assert_eq!(starts, 1);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field("sections"), Some("1"));
    assert!(ends[0].field("duration_ms").is_some());
}

#[test]
fn test_parse_failure_logs_error_event() {
    let capture = init_test_capture();
    let before = capture
        .lifecycle("parse_character_bytes", EVENT_END_ERROR)
        .len();

    let err = parse_character_bytes(b"not json").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);

    let after = capture
        .lifecycle("parse_character_bytes", EVENT_END_ERROR)
        .len();
    assert!(after > before);
}

#[test]
fn test_entry_without_id_logs_warning() {
    let capture = init_test_capture();
    let payload = json!({
        "name": "Aria",
        "inventory": [{"definition": {"name": "Unmarked Crate 5"}, "quantity": 1}]
    });
    let snap = parse_character_bytes(&serde_json::to_vec(&payload).unwrap()).unwrap();
    assert!(snap.inventory.is_empty());

    let warnings: Vec<_> = capture
        .at_level("parse_character_bytes", Level::WARN)
        .into_iter()
        .filter(|e| e.field("entry") == Some("Unmarked Crate 5"))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("collection"), Some("inventory"));
}
