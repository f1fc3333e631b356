//! Settlement: record a completed payment and clear the originating cart.

use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::repos::{carts, payments};
use crate::AppError;

/// Request to settle a completed order against a cart.
#[derive(Debug, Clone)]
pub struct NewSettlement {
    pub email: String,
    pub total: f64,
    pub cart_ids: Vec<i64>,
    pub menu_item_ids: Vec<i64>,
}

/// What settlement produced: the ledger row and how many cart rows were
/// actually cleared.
#[derive(Debug, Clone)]
pub struct SettlementOutcome {
    pub payment: payments::Payment,
    pub removed_cart_count: u64,
}

/// Record a settlement in two steps: insert the ledger row, then bulk-delete
/// the referenced cart rows.
///
/// The two steps are intentionally not wrapped in a transaction. The ledger
/// is authoritative; if the delete fails or removes fewer rows than
/// requested, the cart is left stale and no rollback or retry happens. The
/// ledger row keeps the requested cart_ids verbatim either way.
pub async fn record_settlement<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    settlement: NewSettlement,
) -> Result<SettlementOutcome, AppError> {
    let requested = settlement.cart_ids.len() as u64;

    let payment = payments::insert(
        conn,
        payments::NewPayment {
            email: settlement.email,
            total: settlement.total,
            cart_ids: settlement.cart_ids.clone(),
            menu_item_ids: settlement.menu_item_ids,
        },
    )
    .await?;

    let removed_cart_count = carts::delete_by_ids(conn, &settlement.cart_ids).await?;

    if removed_cart_count < requested {
        warn!(
            payment_id = payment.id,
            requested, removed_cart_count, "settlement cleared fewer cart rows than referenced"
        );
    }

    info!(
        payment_id = payment.id,
        email = %payment.email,
        total = payment.total,
        removed_cart_count,
        "recorded settlement"
    );

    Ok(SettlementOutcome {
        payment,
        removed_cart_count,
    })
}
