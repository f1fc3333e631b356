//! Payment ledger repository functions, generic over ConnectionTrait.
//!
//! The ledger is append-only: there is deliberately no update or delete here.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::payments::{self, IdList};
use crate::AppError;

/// Payment domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub email: String,
    pub total: f64,
    pub cart_ids: Vec<i64>,
    pub menu_item_ids: Vec<i64>,
    pub created_at: OffsetDateTime,
}

impl From<payments::Model> for Payment {
    fn from(model: payments::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            total: model.total,
            cart_ids: model.cart_ids.0,
            menu_item_ids: model.menu_item_ids.0,
            created_at: model.created_at,
        }
    }
}

/// Fields recorded at settlement time. id and timestamp are server-assigned.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub email: String,
    pub total: f64,
    pub cart_ids: Vec<i64>,
    pub menu_item_ids: Vec<i64>,
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: NewPayment,
) -> Result<Payment, AppError> {
    let payment = payments::ActiveModel {
        id: NotSet,
        email: Set(input.email),
        total: Set(input.total),
        cart_ids: Set(IdList(input.cart_ids)),
        menu_item_ids: Set(IdList(input.menu_item_ids)),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await?;
    Ok(Payment::from(payment))
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<Payment>, AppError> {
    let rows = payments::Entity::find()
        .filter(payments::Column::Email.eq(email))
        .order_by_asc(payments::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(Payment::from).collect())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Payment>, AppError> {
    let rows = payments::Entity::find().all(conn).await?;
    Ok(rows.into_iter().map(Payment::from).collect())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, AppError> {
    Ok(payments::Entity::find().count(conn).await?)
}

#[derive(Debug, FromQueryResult)]
struct RevenueRow {
    revenue: Option<f64>,
}

/// Exact SUM over payments.total, pushed down to the database in one pass.
/// An empty ledger sums to 0, not an error.
pub async fn revenue_total<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<f64, AppError> {
    let row = payments::Entity::find()
        .select_only()
        .column_as(payments::Column::Total.sum(), "revenue")
        .into_model::<RevenueRow>()
        .one(conn)
        .await?;
    Ok(row.and_then(|r| r.revenue).unwrap_or(0.0))
}
