//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod clock;
pub mod notifier;
pub mod store;
