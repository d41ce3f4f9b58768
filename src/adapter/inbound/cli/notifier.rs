//! Terminal notifier.

use crate::adapter::inbound::cli::output;
use crate::port::{Notice, Notifier};

/// Shows service notices on the terminal as they happen.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        output::error(&notice.message);
    }
}
