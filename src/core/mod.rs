//! Core logger types

pub mod error;
pub mod event;
pub mod format;
pub mod logger;
pub mod route;

pub use error::{LoggerError, Result};
pub use event::Event;
pub use format::Format;
pub use logger::{Logger, LoggerBuilder};
pub use route::Route;
