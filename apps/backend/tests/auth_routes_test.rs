mod common;

use std::sync::Arc;
use std::time::SystemTime;

use actix_web::{test, web, App};
use backend::{mint_token, routes, verify_token, AppState, SecurityConfig};
use common::{assert_problem_details_structure, MockIntents};
use serde_json::{json, Value};

fn test_security() -> SecurityConfig {
    SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
}

fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::without_db(
        test_security(),
        Arc::new(MockIntents::new()),
    ))
}

#[actix_web::test]
async fn issued_token_roundtrips_with_extra_claims() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/jwt")
        .set_json(json!({
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "photo": "https://example.com/ada.png"
        }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["token"].as_str().expect("token field");

    let claims = verify_token(token, &test_security()).unwrap();
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.extra["name"], json!("Ada Lovelace"));
    assert_eq!(claims.extra["photo"], json!("https://example.com/ada.png"));
}

#[actix_web::test]
async fn issuing_without_email_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/jwt")
        .set_json(json!({ "name": "nobody" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_EMAIL").await;
}

#[actix_web::test]
async fn missing_bearer_is_distinct_from_invalid_token() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    // No Authorization header at all
    let req = test::TestRequest::get()
        .uri("/api/v1/payments/ada%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;

    // Garbage token
    let req = test::TestRequest::get()
        .uri("/api/v1/payments/ada%40example.com")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_INVALID_JWT").await;
}

#[actix_web::test]
async fn self_scoped_routes_reject_identity_mismatch() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(routes::configure),
    )
    .await;

    let token = mint_token(
        "x@example.com",
        serde_json::Map::new(),
        SystemTime::now(),
        &test_security(),
    )
    .unwrap();

    // Payment history for someone else
    let req = test::TestRequest::get()
        .uri("/api/v1/payments/y%40example.com")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED").await;

    // Admin status for someone else
    let req = test::TestRequest::get()
        .uri("/api/v1/users/admin/y%40example.com")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED").await;
}

#[actix_web::test]
async fn payment_intent_converts_to_minor_units() {
    let intents = Arc::new(MockIntents::new());
    let state = web::Data::new(AppState::without_db(test_security(), intents.clone()));

    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/create-payment-intent")
        .set_json(json!({ "price": 42.5 }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["clientSecret"], json!("pi_test_secret"));
    assert_eq!(*intents.requested.lock().unwrap(), vec![4250]);
}

#[actix_web::test]
async fn payment_intent_failure_surfaces_as_upstream_error() {
    let state = web::Data::new(AppState::without_db(
        test_security(),
        Arc::new(common::FailingIntents),
    ));

    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/create-payment-intent")
        .set_json(json!({ "price": 10.0 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 502, "UPSTREAM_ERROR").await;
}
