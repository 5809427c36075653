//! In-memory sink implementation

use parking_lot::Mutex;
use std::sync::Arc;

/// A growable, in-process buffer of rendered event strings.
///
/// The buffer is created and owned by the caller; routes hold a non-owning
/// handle to it. Cloning a `MemorySink` shares the same underlying buffer,
/// so rendered strings appended through one handle are visible through all
/// of them.
///
/// Individual appends are guarded by a mutex and safe across threads, but a
/// whole [`Logger::send`](crate::core::Logger::send) batch is not atomic:
/// concurrent senders targeting the same sink may interleave their entries.
///
/// # Example
///
/// ```
/// use route_logger::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// sink.push("rendered entry".to_string());
///
/// assert_eq!(sink.entries(), vec!["rendered entry".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a rendered string to the buffer
    pub fn push(&self, rendered: String) {
        self.entries.lock().push(rendered);
    }

    /// Get a snapshot of the buffered entries, in append order
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Get the number of buffered entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Discard all buffered entries
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
