//! Notification adapters.
//!
//! Implements the [`Notifier`](crate::port::Notifier) port for the log and
//! for hosts that want notices discarded.

use tracing::error;

use crate::port::{Notice, Notifier};

/// A no-op notifier for when nobody is listening.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: Notice) {}
}

/// A notifier that writes notices to the tracing log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        error!(notice = %notice.message, "User notice");
    }
}

#[cfg(test)]
mod tests;
