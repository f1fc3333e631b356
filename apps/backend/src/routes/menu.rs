use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::extractors::admin_user::AdminUser;
use crate::infra::db::require_db;
use crate::repos::menu::{self, MenuItem, MenuItemInput};
use crate::state::app_state::AppState;
use crate::AppError;

#[derive(Debug, Serialize)]
pub struct MenuItemView {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub recipe: Option<String>,
    pub image: Option<String>,
}

impl From<MenuItem> for MenuItemView {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            category: item.category,
            recipe: item.recipe,
            image: item.image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuItemRequest {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub recipe: Option<String>,
    pub image: Option<String>,
}

impl MenuItemRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::bad_request(
                "INVALID_NAME",
                "Name cannot be empty".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::bad_request(
                "INVALID_PRICE",
                "Price must be a non-negative number".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(AppError::bad_request(
                "INVALID_CATEGORY",
                "Category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn into_input(self) -> MenuItemInput {
        MenuItemInput {
            name: self.name,
            price: self.price,
            category: self.category,
            recipe: self.recipe,
            image: self.image,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub modified_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub deleted_count: u64,
}

async fn list_menu(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let items = menu::list_all(db).await?;
    let views: Vec<MenuItemView> = items.into_iter().map(MenuItemView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

async fn get_menu_item(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let item = menu::find_by_id(db, path.into_inner())
        .await?
        .ok_or_else(|| {
            AppError::not_found("MENU_ITEM_NOT_FOUND", "Menu item not found".to_string())
        })?;
    Ok(HttpResponse::Ok().json(MenuItemView::from(item)))
}

async fn create_menu_item(
    _admin: AdminUser,
    req: web::Json<MenuItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;
    let db = require_db(&app_state)?;
    let item = menu::insert(db, req.into_inner().into_input()).await?;
    Ok(HttpResponse::Ok().json(MenuItemView::from(item)))
}

async fn update_menu_item(
    path: web::Path<i64>,
    req: web::Json<MenuItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;
    let db = require_db(&app_state)?;
    let modified_count = menu::update(db, path.into_inner(), req.into_inner().into_input()).await?;
    Ok(HttpResponse::Ok().json(UpdateAck { modified_count }))
}

async fn delete_menu_item(
    _admin: AdminUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted_count = menu::delete_by_id(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeleteAck { deleted_count }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_menu))
        .route("", web::post().to(create_menu_item))
        .route("/{id}", web::get().to(get_menu_item))
        .route("/{id}", web::patch().to(update_menu_item))
        .route("/{id}", web::delete().to(delete_menu_item));
}
