//! HTTP inbound adapter exposing the user directory.
//!
//! ```text
//! GET /              Hello World
//! GET /users         ["Steve Rogers", ...]
//! GET /users/{id}    {"id":0,"name":"Steve Rogers"} | Not Found
//! ```

pub mod error;
pub mod root;
pub mod state;
pub mod users;

use actix_web::web;

pub use crate::domain::ApiResult;

/// Register every route on `cfg`.
///
/// Callers supply [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use user_directory::inbound::http::{configure, state::HttpState};
/// use user_directory::outbound::InMemoryUserStore;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStore::default()));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::hello)
        .service(users::list_usernames)
        .service(users::get_user);
}
