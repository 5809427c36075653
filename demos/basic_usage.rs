//! Basic event logger usage example
//!
//! Demonstrates event construction, multi-route delivery, and both output
//! formats.
//!
//! Run with: cargo run --example basic_usage

use route_logger::prelude::*;
use route_logger::event;

fn main() -> Result<()> {
    println!("=== Route Logger - Basic Usage Example ===\n");

    // Sinks are caller-owned; routes hold shared handles
    let text_sink = MemorySink::new();
    let json_sink = MemorySink::new();

    let logger = Logger::builder()
        .route(Route::new(Format::Text).with_memory(text_sink.clone()))
        .route(Route::new(Format::Json).with_memory(json_sink.clone()))
        .build();

    println!("1. Sending events:");
    logger.send(&[
        event!("server started"),
        event!("user logged in", "user_id" => "123", "action" => "login"),
        event!("request completed", "status" => "200"),
    ])?;

    println!("\n2. Text route received:");
    for entry in text_sink.entries() {
        println!("   {}", entry);
    }

    println!("\n3. JSON route received:");
    for entry in json_sink.entries() {
        println!("   {}", entry);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
