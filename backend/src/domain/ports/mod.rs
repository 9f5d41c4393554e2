//! Domain ports for the hexagonal boundary.

mod user_store;

#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::UserStore;
