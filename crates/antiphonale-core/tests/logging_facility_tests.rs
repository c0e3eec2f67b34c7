#![allow(clippy::unwrap_used, clippy::expect_used)]

use antiphonale_core::errors::CatalogError;
use antiphonale_core::logging_facility::init_test_capture;
use antiphonale_core::ops::{missa_type_ops, Store};
use antiphonale_core::{log_op_end, log_op_error, log_op_start, DominicaResolver};
use antiphonale_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_start_and_end_events() {
    let capture = init_test_capture();
    let op = "logging_tests_start_end";

    log_op_start!(op, missa_id = 7);
    log_op_end!(op, duration_ms = 12);

    let events = capture.events_for(op);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("missa_id"), Some("7"));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[1].field("duration_ms"), Some("12"));
}

#[test]
fn test_error_event_carries_kind_and_code() {
    let capture = init_test_capture();
    let op = "logging_tests_error";

    let err = CatalogError::NotFound {
        entity: "Missa",
        id: 9,
    };
    log_op_error!(op, err, duration_ms = 1);

    let events = capture.events_for(op);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field("err_kind"), Some("NotFound"));
    assert_eq!(events[0].field("err_code"), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_kernel_emits_no_boundary_events() {
    // GIVEN capture is on
    let capture = init_test_capture();

    // WHEN a kernel operation runs
    let mut store = Store::new();
    missa_type_ops::resolve_default_missa_type(&mut store).unwrap();
    let id = missa_type_ops::find_default_missa_type(&store).unwrap();
    missa_type_ops::delete_missa_type(&mut store, id, &DominicaResolver).unwrap();

    // THEN it logged at debug level only, with no op/event fields
    let boundary = capture.count_events(|e| {
        e.component
            .as_deref()
            .is_some_and(|c| c.starts_with("antiphonale_core::ops"))
            && e.event.is_some()
    });
    assert_eq!(boundary, 0);
}
