//! Outbound adapters implementing domain ports.
//!
//! - **in_memory**: process-local user store seeded at startup.
//!
//! Adapters translate between storage and domain types; they hold no
//! request-handling logic.

pub mod in_memory;

pub use in_memory::InMemoryUserStore;
