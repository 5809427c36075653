//! Route configuration and event delivery

use super::error::Result;
use super::event::Event;
use super::format::Format;
use crate::sinks::MemorySink;
use std::path::PathBuf;

/// A delivery target paired with the format used to render events for it.
///
/// A route may carry a memory sink handle, a file path, both, or neither.
/// A route with no sink at all is legal and delivers nothing. File delivery
/// is declared on the configuration surface but not implemented: delivering
/// to a route with a file path panics rather than failing silently.
///
/// Construction performs no validation. In particular, a format name set
/// through [`Route::with_format_name`] is only checked on the first
/// delivery, where an unknown name surfaces as
/// [`LoggerError::InvalidFormat`](super::LoggerError::InvalidFormat).
pub struct Route {
    memory: Option<MemorySink>,
    file: Option<PathBuf>,
    format: String,
}

impl Route {
    pub fn new(format: Format) -> Self {
        Self {
            memory: None,
            file: None,
            format: format.as_str().to_string(),
        }
    }

    /// Create a route with a format given by name, as accepted from
    /// configuration. The name is stored as-is and parsed at delivery time.
    pub fn with_format_name(name: impl Into<String>) -> Self {
        Self {
            memory: None,
            file: None,
            format: name.into(),
        }
    }

    /// Attach a memory sink handle to this route
    ///
    /// # Example
    ///
    /// ```
    /// use route_logger::{Format, Route};
    /// use route_logger::sinks::MemorySink;
    ///
    /// let sink = MemorySink::new();
    /// let route = Route::new(Format::Text).with_memory(sink.clone());
    /// ```
    #[must_use]
    pub fn with_memory(mut self, sink: MemorySink) -> Self {
        self.memory = Some(sink);
        self
    }

    /// Attach a file path to this route
    ///
    /// File delivery is not implemented; any delivery through a route with
    /// a file path panics.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// The format name this route renders with
    pub fn format_name(&self) -> &str {
        &self.format
    }

    /// Render the event and append it to every configured sink.
    ///
    /// Rendering errors abort the delivery before anything is appended.
    ///
    /// # Panics
    ///
    /// Panics if the route has a file path configured. The memory append
    /// still happens first, matching the sink order of the route.
    pub fn deliver(&self, event: &Event) -> Result<()> {
        let format: Format = self.format.parse()?;
        let rendered = format.render(event)?;

        if let Some(ref sink) = self.memory {
            sink.push(rendered);
        }

        if self.file.is_some() {
            unimplemented!("file delivery is not implemented");
        }

        Ok(())
    }
}
