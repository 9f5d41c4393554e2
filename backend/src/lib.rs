//! Read-only user directory served over HTTP.
//!
//! Layout follows a hexagonal split: [`domain`] holds the records, seed
//! rosters, and the [`domain::ports::UserStore`] port; [`outbound`] provides
//! the in-memory store; [`inbound::http`] maps HTTP requests onto the port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
