//! Menu catalog repository functions, generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::menu_items;
use crate::AppError;

/// Menu item domain model
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub recipe: Option<String>,
    pub image: Option<String>,
}

impl From<menu_items::Model> for MenuItem {
    fn from(model: menu_items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            category: model.category,
            recipe: model.recipe,
            image: model.image,
        }
    }
}

/// Fields accepted when creating or replacing a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemInput {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub recipe: Option<String>,
    pub image: Option<String>,
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<MenuItem>, AppError> {
    let items = menu_items::Entity::find().all(conn).await?;
    Ok(items.into_iter().map(MenuItem::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<MenuItem>, AppError> {
    let item = menu_items::Entity::find_by_id(id).one(conn).await?;
    Ok(item.map(MenuItem::from))
}

/// Fetch the current catalog rows for a set of ids in one query. Missing ids
/// are simply absent from the result.
pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<Vec<MenuItem>, AppError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let items = menu_items::Entity::find()
        .filter(menu_items::Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await?;
    Ok(items.into_iter().map(MenuItem::from).collect())
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: MenuItemInput,
) -> Result<MenuItem, AppError> {
    let item = menu_items::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        price: Set(input.price),
        category: Set(input.category),
        recipe: Set(input.recipe),
        image: Set(input.image),
    }
    .insert(conn)
    .await?;
    Ok(MenuItem::from(item))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    input: MenuItemInput,
) -> Result<u64, AppError> {
    let result = menu_items::Entity::update_many()
        .set(menu_items::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            category: Set(input.category),
            recipe: Set(input.recipe),
            image: Set(input.image),
        })
        .filter(menu_items::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, AppError> {
    let result = menu_items::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, AppError> {
    Ok(menu_items::Entity::find().count(conn).await?)
}
