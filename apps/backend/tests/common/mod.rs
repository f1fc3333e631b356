#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Mutex;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use async_trait::async_trait;
use backend::services::payment_intent::{PaymentIntent, PaymentIntents};
use backend::AppError;
use serde_json::Value;

/// Validate that a response follows the ProblemDetails structure.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/problem+json"),
        "expected problem+json, got {content_type}"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"].as_u64(), Some(expected_status as u64));
    assert_eq!(body["code"].as_str(), Some(expected_code));
    assert!(body["type"].as_str().unwrap_or_default().contains(expected_code));
    assert!(body["title"].is_string());
    assert!(body["detail"].is_string());
}

/// Hand mock for the payment-intent seam: records requested amounts and
/// hands back a fixed secret.
pub struct MockIntents {
    pub requested: Mutex<Vec<i64>>,
    pub secret: String,
}

impl MockIntents {
    pub fn new() -> Self {
        Self {
            requested: Mutex::new(Vec::new()),
            secret: "pi_test_secret".to_string(),
        }
    }
}

#[async_trait]
impl PaymentIntents for MockIntents {
    async fn create_intent(&self, amount_minor: i64) -> Result<PaymentIntent, AppError> {
        self.requested.lock().unwrap().push(amount_minor);
        Ok(PaymentIntent {
            client_secret: self.secret.clone(),
        })
    }
}

/// An intents client that always fails, for upstream-error paths.
pub struct FailingIntents;

#[async_trait]
impl PaymentIntents for FailingIntents {
    async fn create_intent(&self, _amount_minor: i64) -> Result<PaymentIntent, AppError> {
        Err(AppError::upstream("intent service unreachable".to_string()))
    }
}
