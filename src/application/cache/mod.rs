//! Stateful caches for application services.

mod ttl;

pub use ttl::TtlCache;
