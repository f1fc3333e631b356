//! User repository functions, generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::users;
use crate::AppError;

pub const ROLE_ADMIN: &str = "admin";

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            role: model.role,
            created_at: model.created_at,
        }
    }
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, AppError> {
    let user = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await?;
    Ok(user.map(User::from))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    name: Option<&str>,
) -> Result<User, AppError> {
    let user = users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        name: Set(name.map(str::to_string)),
        role: NotSet,
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await?;
    Ok(User::from(user))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, AppError> {
    let users = users::Entity::find().all(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

/// Promote a user to admin. The only role mutation in the system; roles are
/// never demoted. Returns the number of rows touched (0 when the id is
/// unknown).
pub async fn promote_to_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, AppError> {
    let result = users::Entity::update_many()
        .col_expr(users::Column::Role, Expr::value(ROLE_ADMIN))
        .filter(users::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, AppError> {
    let result = users::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, AppError> {
    Ok(users::Entity::find().count(conn).await?)
}
