//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on domain ports
//! and stay testable with mocks.

use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-only user lookups.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Bundle the given store.
    #[must_use]
    pub const fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
