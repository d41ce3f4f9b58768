//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  SurveyService + report ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  Store  │            │    Clock    │              │ Notifier  │
//! │ Adapter │            │             │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`SurveyStore`] - Persistence for employees and support requests
//! - [`Notifier`] - User-facing messages (console, logs, web toast)
//! - [`Clock`] - Monotonic time source for cache expiry

pub mod outbound;

pub use outbound::clock::{Clock, SystemClock};
pub use outbound::notifier::{Notice, Notifier};
pub use outbound::store::SurveyStore;
