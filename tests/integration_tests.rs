//! Integration tests for the event logger
//!
//! These tests verify:
//! - Multi-route fan-out and delivery order
//! - Text and JSON rendering through the full send path
//! - First-error-aborts-the-batch semantics
//! - The unimplemented file destination

use route_logger::sinks::MemorySink;
use route_logger::{event, Event, Format, Logger, LoggerError, Route};

#[test]
fn test_single_route_delivery_order() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_memory(sink.clone()))
        .build();

    logger
        .send(&[Event::new("a"), Event::new("b")])
        .expect("send failed");

    assert_eq!(sink.entries(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_fan_out_to_text_and_json_routes() {
    let text_sink = MemorySink::new();
    let json_sink = MemorySink::new();

    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_memory(text_sink.clone()))
        .route(Route::new(Format::Json).with_memory(json_sink.clone()))
        .build();

    let event = Event::new("x").with_field("k", "v");
    logger.send(&[event]).expect("send failed");

    assert_eq!(text_sink.entries(), vec!["x [k: v]".to_string()]);

    let json_entries = json_sink.entries();
    assert_eq!(json_entries.len(), 1);
    let parsed: serde_json::Value =
        serde_json::from_str(&json_entries[0]).expect("sink entry is not valid JSON");
    assert_eq!(parsed["Message"], "x");
    assert_eq!(parsed["Data"]["k"], "v");
}

#[test]
fn test_zero_routes_is_noop() {
    let logger = Logger::new([]);

    logger
        .send(&[Event::new("a"), Event::new("b"), Event::new("c")])
        .expect("send with zero routes should succeed");
}

#[test]
fn test_zero_events_is_noop() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .route(Route::new(Format::Json).with_memory(sink.clone()))
        .build();

    logger.send(&[]).expect("send with zero events should succeed");

    assert!(sink.is_empty());
}

#[test]
fn test_first_error_aborts_batch() {
    // Route order matters: the valid route must have received its delivery
    // before the invalid one fails.
    let valid_sink = MemorySink::new();
    let unreachable_sink = MemorySink::new();

    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_memory(valid_sink.clone()))
        .route(Route::with_format_name("binary").with_memory(unreachable_sink.clone()))
        .build();

    let err = logger.send(&[Event::new("probe")]).unwrap_err();

    assert!(matches!(err, LoggerError::InvalidFormat { ref format } if format == "binary"));
    assert_eq!(valid_sink.entries(), vec!["probe".to_string()]);
    assert!(unreachable_sink.is_empty());
}

#[test]
fn test_error_skips_remaining_routes() {
    let never_reached = MemorySink::new();

    let logger = Logger::builder()
        .route(Route::with_format_name("binary"))
        .route(Route::new(Format::Text).with_memory(never_reached.clone()))
        .build();

    let result = logger.send(&[Event::new("probe")]);

    assert!(result.is_err());
    assert!(never_reached.is_empty());
}

#[test]
#[should_panic(expected = "file delivery is not implemented")]
fn test_file_route_is_fatal() {
    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_file("/var/log/events.log"))
        .build();

    let _ = logger.send(&[Event::new("never written")]);
}

#[test]
fn test_route_without_sinks_delivers_nothing() {
    let logger = Logger::builder().route(Route::new(Format::Text)).build();

    logger
        .send(&[Event::new("into the void")])
        .expect("sink-less route should be a silent no-op");
}

#[test]
fn test_shared_sink_across_routes() {
    // Two routes writing to the same buffer: route order decides entry order
    let sink = MemorySink::new();

    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_memory(sink.clone()))
        .route(Route::new(Format::Json).with_memory(sink.clone()))
        .build();

    logger.send(&[Event::new("shared")]).expect("send failed");

    assert_eq!(
        sink.entries(),
        vec!["shared".to_string(), "{\"Message\":\"shared\"}".to_string()]
    );
}

#[test]
fn test_event_macro_through_send() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_memory(sink.clone()))
        .build();

    logger
        .send(&[event!("user logged in", "user_id" => "123")])
        .expect("send failed");

    assert_eq!(
        sink.entries(),
        vec!["user logged in [user_id: 123]".to_string()]
    );
}

#[test]
fn test_sent_events_are_not_retained() {
    // Only the rendered form lands in the sink; clearing it leaves nothing
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_memory(sink.clone()))
        .build();

    logger.send(&[Event::new("ephemeral")]).expect("send failed");
    sink.clear();

    logger.send(&[Event::new("second")]).expect("send failed");
    assert_eq!(sink.entries(), vec!["second".to_string()]);
}
