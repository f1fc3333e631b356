use actix_web::{web, HttpResponse, Result};

use crate::extractors::admin_user::AdminUser;
use crate::infra::db::require_db;
use crate::services::stats;
use crate::state::app_state::AppState;
use crate::AppError;

/// Dashboard headline numbers. Admin-gated.
async fn admin_stats(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let summary = stats::summary_stats(db).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Per-category sales breakdown. Admin-gated.
async fn order_stats(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let breakdown = stats::category_breakdown(db).await?;
    Ok(HttpResponse::Ok().json(breakdown))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin-stats", web::get().to(admin_stats))
        .route("/order-stats", web::get().to(order_stats));
}
