use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::extractors::admin_user::AdminUser;
use crate::extractors::identity::Identity;
use crate::infra::db::require_db;
use crate::repos::users::{self, User};
use crate::state::app_state::AppState;
use crate::AppError;

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub inserted_id: Option<i64>,
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

#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

async fn list_users(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let users = users::list_all(db).await?;
    let views: Vec<UserView> = users.into_iter().map(UserView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

/// Public registration hook called after storefront sign-up. Idempotent:
/// an already-known email is acknowledged without a second row.
async fn create_user(
    req: web::Json<CreateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }

    let db = require_db(&app_state)?;

    if users::find_by_email(db, &req.email).await?.is_some() {
        return Ok(HttpResponse::Ok().json(CreateUserResponse {
            message: Some("Old user".to_string()),
            inserted_id: None,
        }));
    }

    let user = users::create(db, &req.email, req.name.as_deref()).await?;
    Ok(HttpResponse::Ok().json(CreateUserResponse {
        message: None,
        inserted_id: Some(user.id),
    }))
}

/// Self-scoped admin-status check: the caller may only ask about itself.
async fn admin_status(
    identity: Identity,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    identity.require_self(&email)?;

    let db = require_db(&app_state)?;
    let admin = users::find_by_email(db, &email)
        .await?
        .map(|u| u.is_admin())
        .unwrap_or(false);

    Ok(HttpResponse::Ok().json(AdminStatusResponse { admin }))
}

/// Promote a user to admin. Admin-gated; the only role mutation.
async fn promote_user(
    _admin: AdminUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let modified_count = users::promote_to_admin(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UpdateAck { modified_count }))
}

async fn delete_user(
    _admin: AdminUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted_count = users::delete_by_id(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeleteAck { deleted_count }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_users))
        .route("", web::post().to(create_user))
        .route("/admin/{email}", web::get().to(admin_status))
        .route("/{id}", web::patch().to(promote_user))
        .route("/{id}", web::delete().to(delete_user));
}
