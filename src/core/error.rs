//! Error types for the event logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Format name outside the accepted set
    #[error("invalid event format '{format}': only \"json\" and \"text\" are accepted")]
    InvalidFormat { format: String },

    /// JSON rendering failed for an event
    #[error("failed to render event as JSON: \"{message}\"")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoggerError {
    /// Create an invalid format error carrying the offending value
    pub fn invalid_format(format: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            format: format.into(),
        }
    }

    /// Create a serialization error naming the event's message
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        LoggerError::Serialization {
            message: message.into(),
            source,
        }
    }
}
