//! Driven port for read-only user lookups.
//!
//! Inbound adapters depend on this trait rather than a concrete store so the
//! roster can be swapped per process or per test.

use crate::domain::{User, UserId, UserName};

/// Read-only directory of users.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    /// Names of every stored user, in insertion order.
    fn list_usernames(&self) -> Vec<UserName>;

    /// The user carrying `id`, or `None` when no record matches.
    fn find_by_id(&self, id: UserId) -> Option<User>;
}
