//! Event structure

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single loggable occurrence: a message plus optional key-value context.
///
/// Events are plain values with no identity beyond equality. They are not
/// retained by the logger; only their rendered form reaches a sink.
///
/// The serialized shape is fixed: a JSON object with a `Message` member and,
/// when context is present, a `Data` member mapping string keys to string
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Data", default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}

impl Event {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: HashMap::new(),
        }
    }

    /// Add a context field
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Replace the context map wholesale
    #[must_use]
    pub fn with_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = data;
        self
    }

    /// Add a context field (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.data.insert(key.into(), value.into());
    }

    /// Check if the event carries any context fields
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}
