//! Main logger implementation

use super::error::Result;
use super::event::Event;
use super::route::Route;

/// An ordered collection of routes with batch event submission.
///
/// The route list is fixed at construction: there is no add/remove
/// operation and no open/closed lifecycle. Duplicate routes are allowed and
/// each receives its own delivery.
pub struct Logger {
    routes: Vec<Route>,
}

impl Logger {
    /// Create a logger over the given routes, zero or more.
    ///
    /// No validation happens here; misconfigured routes only surface when
    /// they are delivered to.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            routes: routes.into_iter().collect(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use route_logger::{Format, Logger, Route};
    /// use route_logger::sinks::MemorySink;
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::builder()
    ///     .route(Route::new(Format::Text).with_memory(sink.clone()))
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The configured routes, in registration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Deliver the given events to all routes associated with this logger.
    ///
    /// Routes are visited in registration order and, within each route,
    /// events in call order. The first delivery error aborts the whole
    /// batch and is returned unchanged; routes and events not yet reached
    /// are skipped. There is no partial-result reporting and no retry.
    ///
    /// With no events or no routes this is a successful no-op.
    pub fn send(&self, events: &[Event]) -> Result<()> {
        for route in &self.routes {
            for event in events {
                route.deliver(event)?;
            }
        }

        Ok(())
    }

    /// Deliver a single event to all routes
    pub fn send_one(&self, event: &Event) -> Result<()> {
        self.send(std::slice::from_ref(event))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new([])
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use route_logger::{Format, Logger, Route};
/// use route_logger::sinks::MemorySink;
///
/// let text_sink = MemorySink::new();
/// let json_sink = MemorySink::new();
///
/// let logger = Logger::builder()
///     .route(Route::new(Format::Text).with_memory(text_sink.clone()))
///     .route(Route::new(Format::Json).with_memory(json_sink.clone()))
///     .build();
/// ```
pub struct LoggerBuilder {
    routes: Vec<Route>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Add a route
    #[must_use = "builder methods return a new value"]
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger::new(self.routes)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
