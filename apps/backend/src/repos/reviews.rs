//! Review repository functions, generic over ConnectionTrait.
//!
//! Reviews are read-only from this service; rows are seeded out of band.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::reviews;
use crate::AppError;

/// Review domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub details: String,
    pub rating: f64,
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            details: model.details,
            rating: model.rating,
        }
    }
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Review>, AppError> {
    let rows = reviews::Entity::find().all(conn).await?;
    Ok(rows.into_iter().map(Review::from).collect())
}
