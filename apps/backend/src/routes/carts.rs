use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::infra::db::require_db;
use crate::repos::carts::{self, CartItem, NewCartItem};
use crate::state::app_state::AppState;
use crate::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: i64,
    pub email: String,
    pub menu_item_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
}

impl From<CartItem> for CartItemView {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            email: item.email,
            menu_item_id: item.menu_item_id,
            name: item.name,
            image: item.image,
            price: item.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    #[serde(default)]
    pub email: String,
    pub menu_item_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub deleted_count: u64,
}

async fn list_cart(
    query: web::Query<CartQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let items = carts::find_by_email(db, &query.email).await?;
    let views: Vec<CartItemView> = items.into_iter().map(CartItemView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

async fn add_cart_item(
    req: web::Json<AddCartItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }
    if !req.price.is_finite() || req.price < 0.0 {
        return Err(AppError::bad_request(
            "INVALID_PRICE",
            "Price must be a non-negative number".to_string(),
        ));
    }

    let db = require_db(&app_state)?;
    let req = req.into_inner();
    let item = carts::insert(
        db,
        NewCartItem {
            email: req.email,
            menu_item_id: req.menu_item_id,
            name: req.name,
            image: req.image,
            price: req.price,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(CartItemView::from(item)))
}

async fn remove_cart_item(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted_count = carts::delete_by_id(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeleteAck { deleted_count }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_cart))
        .route("", web::post().to(add_cart_item))
        .route("/{id}", web::delete().to(remove_cart_item));
}
