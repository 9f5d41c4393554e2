//! In-memory [`UserStore`] adapter.
//!
//! Records are fixed at construction and never mutated, so the store can be
//! shared across worker threads behind an `Arc` without locking.

use crate::domain::ports::UserStore;
use crate::domain::{SeedSet, User, UserId, UserName, UserValidationError};

/// Ordered, immutable user store.
///
/// # Examples
/// ```
/// use user_directory::domain::SeedSet;
/// use user_directory::domain::ports::UserStore;
/// use user_directory::outbound::InMemoryUserStore;
///
/// let store = InMemoryUserStore::from_seed(SeedSet::Original).expect("valid roster");
/// assert_eq!(store.list_usernames().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Wrap an explicit list of users; insertion order is preserved.
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Build a store holding the named roster.
    ///
    /// # Errors
    /// Returns [`UserValidationError`] if the roster breaks a user invariant.
    pub fn from_seed(seed: SeedSet) -> Result<Self, UserValidationError> {
        seed.users().map(Self::new)
    }
}

impl UserStore for InMemoryUserStore {
    fn list_usernames(&self) -> Vec<UserName> {
        self.users.iter().map(|user| user.name().clone()).collect()
    }

    // First match wins when ids collide.
    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|user| user.id() == id).cloned()
    }
}
