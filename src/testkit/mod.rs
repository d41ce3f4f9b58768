//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] — `ManualClock`, a clock that only moves when told to.
//! - [`notifier`] — `RecordingNotifier`, collects notices for assertions.
//! - [`store`] — `FailingStore` and `CountingStore` doubles for the store port.
//! - [`domain`] — Builders for sample employees and tables.

pub mod clock;
pub mod domain;
pub mod notifier;
pub mod store;
