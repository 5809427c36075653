//! Macros for ergonomic event construction.
//!
//! # Examples
//!
//! ```
//! use route_logger::event;
//!
//! // Bare message
//! let started = event!("server started");
//!
//! // With context fields
//! let login = event!("user logged in", "user_id" => "123", "action" => "login");
//! assert_eq!(login.data.len(), 2);
//! ```

/// Build an [`Event`](crate::Event) from a message and optional
/// `key => value` context pairs.
///
/// # Examples
///
/// ```
/// use route_logger::event;
///
/// let e = event!("request completed", "status" => "200");
/// assert_eq!(e.message, "request completed");
/// assert_eq!(e.data["status"], "200");
/// ```
#[macro_export]
macro_rules! event {
    ($message:expr) => {
        $crate::Event::new($message)
    };
    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let mut event = $crate::Event::new($message);
        $(
            event.add_field($key, $value);
        )+
        event
    }};
}
