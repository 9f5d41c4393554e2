//! Users API handlers.
//!
//! ```text
//! GET /users
//! GET /users/{id}
//! ```

use std::num::ParseIntError;

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, get, web};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Error, User, UserId, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Plain-text body returned when no user matches the requested id.
pub const NOT_FOUND_BODY: &str = "Not Found";

const ID_PARAM: &str = "id";

/// Failures raised while reading the `{id}` path segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIdParamError {
    /// The route carried no `id` segment.
    #[error("path parameter `id` is required")]
    Missing,
    /// The segment is not a base-10 32-bit integer.
    #[error("id must be a base-10 integer, got '{value}'")]
    Malformed {
        /// Raw segment as received.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Parse the raw `{id}` segment.
///
/// Accepts the same range as a signed 32-bit integer. Negative values parse
/// successfully but yield `Ok(None)` because no stored user can carry them.
///
/// # Errors
/// [`UserIdParamError::Missing`] when `raw` is `None`;
/// [`UserIdParamError::Malformed`] when it is not an integer.
///
/// # Examples
/// ```
/// use user_directory::domain::UserId;
/// use user_directory::inbound::http::users::parse_user_id;
///
/// assert_eq!(parse_user_id(Some("2")), Ok(Some(UserId::new(2))));
/// assert_eq!(parse_user_id(Some("-1")), Ok(None));
/// assert!(parse_user_id(Some("abc")).is_err());
/// ```
pub fn parse_user_id(raw: Option<&str>) -> Result<Option<UserId>, UserIdParamError> {
    let raw = raw.ok_or(UserIdParamError::Missing)?;
    let parsed = raw
        .parse::<i32>()
        .map_err(|source| UserIdParamError::Malformed {
            value: raw.to_owned(),
            source,
        })?;
    Ok(UserId::try_from(parsed).ok())
}

fn map_user_id_error(err: UserIdParamError) -> Error {
    let message = err.to_string();
    match err {
        UserIdParamError::Missing => Error::invalid_request(message)
            .with_details(json!({ "field": ID_PARAM, "code": "missing_id" })),
        UserIdParamError::Malformed { value, .. } => Error::invalid_request(message)
            .with_details(json!({ "field": ID_PARAM, "code": "invalid_id", "value": value })),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(NOT_FOUND_BODY)
}

/// List every username in store order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users::list_usernames;
///
/// let app = App::new().service(list_usernames);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Usernames in insertion order", body = [String])
    ),
    tags = ["users"],
    operation_id = "listUsernames"
)]
#[get("/users")]
pub async fn list_usernames(state: web::Data<HttpState>) -> web::Json<Vec<UserName>> {
    let names = state.users.list_usernames();
    debug!(count = names.len(), "listed usernames");
    web::Json(names)
}

/// Fetch a single user by numeric id.
///
/// A miss is answered with `200 OK` and a plain-text `Not Found` body rather
/// than a 404; clients distinguish the two outcomes by content type.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Base-10 user identifier")),
    responses(
        (
            status = 200,
            description = "Matching user as JSON, or a plain-text `Not Found` body",
            content((User = "application/json"), (String = "text/plain"))
        ),
        (status = 400, description = "Missing or non-integer id", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(request.match_info().get(ID_PARAM)).map_err(map_user_id_error)?;
    let user: Option<User> = id.and_then(|id| state.users.find_by_id(id));
    debug!(user_id = ?id, found = user.is_some(), "user lookup");
    Ok(user.map_or_else(not_found, |user| HttpResponse::Ok().json(user)))
}
