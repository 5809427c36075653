//! # Route Logger
//!
//! A lightweight structured event logging library with multi-route delivery
//! and pluggable output formats.
//!
//! ## Features
//!
//! - **Structured Events**: A message plus optional key-value context
//! - **Two Formats**: Human-readable text and machine-readable JSON
//! - **Multi-Route Fan-Out**: Every event goes to every configured route
//! - **Easy to Use**: Simple and intuitive API

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{Event, Format, Logger, LoggerBuilder, LoggerError, Result, Route};
    pub use crate::sinks::MemorySink;
}

pub use crate::core::{Event, Format, Logger, LoggerBuilder, LoggerError, Result, Route};
pub use sinks::MemorySink;
