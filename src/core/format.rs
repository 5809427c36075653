//! Output format selection and event rendering
//!
//! Two formats are supported:
//! - Text: the message followed by bracketed context fields (default)
//! - Json: a JSON object for machine processing

use super::error::{LoggerError, Result};
use super::event::Event;
use std::fmt;
use std::str::FromStr;

/// Output format for rendered events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Human-readable text format (default)
    ///
    /// Example: `user logged in [action: login] [user_id: 123]`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"Message":"user logged in","Data":{"user_id":"123"}}`
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
        }
    }

    /// Render an event according to this format.
    ///
    /// Pure conversion: the event is not mutated and nothing is delivered.
    /// Text output lists context fields in sorted key order so repeated
    /// renders of the same event are identical.
    pub fn render(&self, event: &Event) -> Result<String> {
        match self {
            Format::Text => Ok(render_text(event)),
            Format::Json => render_json(event),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(LoggerError::invalid_format(s)),
        }
    }
}

/// Render as text: the message, then one ` [key: value]` segment per field
fn render_text(event: &Event) -> String {
    let mut result = event.message.clone();

    if event.has_data() {
        let mut fields: Vec<_> = event.data.iter().collect();
        fields.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (key, value) in fields {
            result.push_str(&format!(" [{}: {}]", key, value));
        }
    }

    result
}

/// Render as a single-line JSON object
fn render_json(event: &Event) -> Result<String> {
    serde_json::to_string(event)
        .map_err(|source| LoggerError::serialization(&event.message, source))
}
