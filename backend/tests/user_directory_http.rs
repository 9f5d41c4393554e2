//! End-to-end tests for the user directory route table.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::{StatusCode, header},
    test::{self, TestRequest},
    web,
};
use rstest::rstest;
use serde_json::{Value, json};
use user_directory::Trace;
use user_directory::domain::{SeedSet, User};
use user_directory::inbound::http::configure;
use user_directory::inbound::http::state::HttpState;
use user_directory::outbound::InMemoryUserStore;

async fn init_app(
    seed: SeedSet,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let store = InMemoryUserStore::from_seed(seed).expect("valid roster");
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(Arc::new(store))))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn get(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    uri: &str,
) -> ServiceResponse<BoxBody> {
    test::call_service(app, TestRequest::get().uri(uri).to_request()).await
}

fn content_type(res: &ServiceResponse<BoxBody>) -> String {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

#[actix_web::test]
async fn root_says_hello() {
    let app = init_app(SeedSet::Extended).await;

    let res = get(&app, "/").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(content_type(&res).starts_with("text/plain"));
    assert_eq!(test::read_body(res).await, "Hello World".as_bytes());
}

#[actix_web::test]
async fn lists_extended_roster_in_order() {
    let app = init_app(SeedSet::Extended).await;

    let res = get(&app, "/users").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(content_type(&res).starts_with("application/json"));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!([
            "Steve Rogers",
            "Tony Stark",
            "Bruce Banner",
            "Natasha Romanoff",
            "Carol Danvers"
        ])
    );
}

#[actix_web::test]
async fn lists_original_roster_in_order() {
    let app = init_app(SeedSet::Original).await;

    let body: Value = test::read_body_json(get(&app, "/users").await).await;

    assert_eq!(body, json!(["Steve Rogers", "Tony Stark", "Carol Danvers"]));
}

#[actix_web::test]
async fn fetches_user_by_id() {
    let app = init_app(SeedSet::Extended).await;

    let res = get(&app, "/users/2").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(content_type(&res).starts_with("application/json"));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "id": 2, "name": "Bruce Banner" }));
}

#[rstest]
#[case(SeedSet::Original)]
#[case(SeedSet::Extended)]
#[actix_web::test]
async fn every_seeded_user_round_trips_over_http(#[case] seed: SeedSet) {
    let app = init_app(seed).await;

    for user in seed.users().expect("valid roster") {
        let res = get(&app, &format!("/users/{}", user.id())).await;
        assert_eq!(res.status(), StatusCode::OK);
        let fetched: User = test::read_body_json(res).await;
        assert_eq!(fetched, user);
    }
}

#[rstest]
#[case("/users/99")]
#[case("/users/5")]
#[case("/users/-1")]
#[actix_web::test]
async fn unknown_user_answers_not_found_text_with_ok_status(#[case] uri: &str) {
    let app = init_app(SeedSet::Extended).await;

    let res = get(&app, uri).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(content_type(&res).starts_with("text/plain"));
    assert_eq!(test::read_body(res).await, "Not Found".as_bytes());
}

#[rstest]
#[case("/users/abc")]
#[case("/users/2.0")]
#[case("/users/4294967296")]
#[actix_web::test]
async fn malformed_id_is_a_client_error(#[case] uri: &str) {
    let app = init_app(SeedSet::Extended).await;

    let res = get(&app, uri).await;

    assert!(res.status().is_client_error());
    assert!(res.headers().contains_key("trace-id"));
    let trace_id = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        trace_id.as_deref()
    );
}

#[actix_web::test]
async fn repeated_requests_return_identical_bodies() {
    let app = init_app(SeedSet::Extended).await;

    let first = test::read_body(get(&app, "/users").await).await;
    let second = test::read_body(get(&app, "/users").await).await;
    let third = test::read_body(get(&app, "/users/4").await).await;
    let fourth = test::read_body(get(&app, "/users/4").await).await;

    assert_eq!(first, second);
    assert_eq!(third, fourth);
}

#[rstest]
#[case("/users/")]
#[case("/users/1/extra")]
#[case("/missing")]
#[case("/health/ready")]
#[actix_web::test]
async fn unrouted_paths_fall_through_to_not_found(#[case] uri: &str) {
    let app = init_app(SeedSet::Extended).await;

    let res = get(&app, uri).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
