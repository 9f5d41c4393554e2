//! Root greeting.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// Greeting body served at `/`.
pub const GREETING: &str = "Hello World";

/// Fixed plain-text greeting.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tags = ["root"],
    operation_id = "hello"
)]
#[get("/")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};

    #[actix_web::test]
    async fn greets_in_plain_text() {
        let app = test::init_service(App::new().service(hello)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(test::read_body(res).await, GREETING.as_bytes());
    }
}
