//! Notifier that records what it was asked to show.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::port::{Notice, Notifier};

/// Thread-safe notice collector for assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages only, in arrival order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
