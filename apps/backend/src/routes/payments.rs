use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::extractors::identity::Identity;
use crate::infra::db::require_db;
use crate::repos::payments::{self, Payment};
use crate::services::payment_intent::to_minor_units;
use crate::services::settlement::{self, NewSettlement};
use crate::state::app_state::AppState;
use crate::AppError;

#[derive(Debug, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRequest {
    #[serde(default)]
    pub email: String,
    pub total: f64,
    #[serde(default)]
    pub cart_ids: Vec<i64>,
    #[serde(default)]
    pub menu_item_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResponse {
    pub payment_result: InsertAck,
    pub delete_result: DeleteAck,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub inserted_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub deleted_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    pub id: i64,
    pub email: String,
    pub total: f64,
    pub cart_ids: Vec<i64>,
    pub menu_item_ids: Vec<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Payment> for PaymentView {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            email: payment.email,
            total: payment.total,
            cart_ids: payment.cart_ids,
            menu_item_ids: payment.menu_item_ids,
            created_at: payment.created_at,
        }
    }
}

/// Ask the processor for a settlement secret. Amount goes over the wire in
/// minor units.
async fn create_payment_intent(
    req: web::Json<PaymentIntentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if !req.price.is_finite() || req.price < 0.0 {
        return Err(AppError::bad_request(
            "INVALID_PRICE",
            "Price must be a non-negative number".to_string(),
        ));
    }

    let intent = app_state
        .payments
        .create_intent(to_minor_units(req.price))
        .await?;

    Ok(HttpResponse::Ok().json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// Settle a completed order: append the ledger row, clear the cart.
async fn record_payment(
    req: web::Json<SettlementRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }
    if !req.total.is_finite() || req.total < 0.0 {
        return Err(AppError::bad_request(
            "INVALID_TOTAL",
            "Total must be a non-negative number".to_string(),
        ));
    }

    let db = require_db(&app_state)?;
    let req = req.into_inner();
    let outcome = settlement::record_settlement(
        db,
        NewSettlement {
            email: req.email,
            total: req.total,
            cart_ids: req.cart_ids,
            menu_item_ids: req.menu_item_ids,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(SettlementResponse {
        payment_result: InsertAck {
            inserted_id: outcome.payment.id,
        },
        delete_result: DeleteAck {
            deleted_count: outcome.removed_cart_count,
        },
    }))
}

/// Self-scoped payment history.
async fn payment_history(
    identity: Identity,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    identity.require_self(&email)?;

    let db = require_db(&app_state)?;
    let history = payments::find_by_email(db, &email).await?;
    let views: Vec<PaymentView> = history.into_iter().map(PaymentView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(record_payment))
        .route("/{email}", web::get().to(payment_history));
}

pub fn configure_intent_route(cfg: &mut web::ServiceConfig) {
    cfg.route("/create-payment-intent", web::post().to(create_payment_intent));
}
