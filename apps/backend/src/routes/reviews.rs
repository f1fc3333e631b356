use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::infra::db::require_db;
use crate::repos::reviews::{self, Review};
use crate::state::app_state::AppState;
use crate::AppError;

#[derive(Debug, Serialize)]
pub struct ReviewView {
    pub id: i64,
    pub name: String,
    pub details: String,
    pub rating: f64,
}

impl From<Review> for ReviewView {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            name: review.name,
            details: review.details,
            rating: review.rating,
        }
    }
}

async fn list_reviews(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let reviews = reviews::list_all(db).await?;
    let views: Vec<ReviewView> = reviews.into_iter().map(ReviewView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_reviews));
}
