//! Cart repository functions, generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::cart_items;
use crate::AppError;

/// Cart item domain model
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub email: String,
    pub menu_item_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
}

impl From<cart_items::Model> for CartItem {
    fn from(model: cart_items::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            menu_item_id: model.menu_item_id,
            name: model.name,
            image: model.image,
            price: model.price,
        }
    }
}

/// Fields accepted when adding an item to a cart.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub email: String,
    pub menu_item_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<CartItem>, AppError> {
    let items = cart_items::Entity::find()
        .filter(cart_items::Column::Email.eq(email))
        .all(conn)
        .await?;
    Ok(items.into_iter().map(CartItem::from).collect())
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: NewCartItem,
) -> Result<CartItem, AppError> {
    let item = cart_items::ActiveModel {
        id: NotSet,
        email: Set(input.email),
        menu_item_id: Set(input.menu_item_id),
        name: Set(input.name),
        image: Set(input.image),
        price: Set(input.price),
    }
    .insert(conn)
    .await?;
    Ok(CartItem::from(item))
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, AppError> {
    let result = cart_items::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Bulk delete by id-set membership. Ids that no longer exist are silently
/// skipped; the returned count reflects rows actually removed.
pub async fn delete_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<u64, AppError> {
    if ids.is_empty() {
        return Ok(0);
    }
    let result = cart_items::Entity::delete_many()
        .filter(cart_items::Column::Id.is_in(ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
