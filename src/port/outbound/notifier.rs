//! Notifier port for user-facing messages.
//!
//! Storage failures never escape the service layer; they are turned into a
//! [`Notice`] and handed to whatever surface the host shows to its user.

/// An error message for the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for the "show message" surface.
///
/// Implementations must be thread-safe (`Send + Sync`) and return quickly.
pub trait Notifier: Send + Sync {
    /// Show a notice to the user.
    fn notify(&self, notice: Notice);
}
