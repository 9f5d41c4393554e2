//! OpenAPI documentation.
//!
//! Registers every HTTP path and the shared schemas. Served through Swagger UI
//! in debug builds and exported with `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User};

/// OpenAPI document for the user directory.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Read-only listing and lookup of a fixed user roster."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::hello,
        crate::inbound::http::users::list_usernames,
        crate::inbound::http::users::get_user,
    ),
    components(schemas(User, Error, ErrorCode)),
    tags(
        (name = "root", description = "Greeting"),
        (name = "users", description = "User listing and lookup")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/users")]
    #[case("/users/{id}")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn user_schema_exposes_id_and_name() {
        let mut fields = schema_fields("User");
        fields.sort();
        assert_eq!(fields, ["id", "name"]);
    }

    #[rstest]
    fn documents_only_directory_routes() {
        let doc = ApiDoc::openapi();
        let mut paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        paths.sort_unstable();
        assert_eq!(paths, ["/", "/users", "/users/{id}"]);
    }

    #[rstest]
    fn error_schema_exposes_code_and_message() {
        let fields = schema_fields("Error");
        assert!(fields.iter().any(|field| field == "code"));
        assert!(fields.iter().any(|field| field == "message"));
    }
}
