//! Domain primitives and ports.
//!
//! Purpose: define the user record, the seed rosters, and the error payload
//! independently of any transport. Types are immutable once built.
//!
//! Public surface:
//! - `User`, `UserId`, `UserName`: directory entries.
//! - `SeedSet`: named startup rosters.
//! - `Error`, `ErrorCode`: client-facing error payload.
//! - `TraceId`: request correlation identifier.
//! - `ports::UserStore`: lookup port implemented by outbound adapters.

pub mod error;
pub mod ports;
pub mod seed;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::seed::{SeedSet, UnknownSeedSet};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserName, UserValidationError};

/// Convenient handler result alias.
///
/// # Examples
/// ```
/// use user_directory::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::invalid_request("nope"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
