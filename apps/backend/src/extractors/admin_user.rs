use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::extractors::identity::Identity;
use crate::infra::db::require_db;
use crate::repos::users::{self, User};
use crate::state::app_state::AppState;
use crate::AppError;

/// Admin gate: verified identity plus one storage read resolving the
/// caller's user record. Runs per request, no caching.
///
/// Forbidden when the record is absent or its role is not "admin" —
/// a missing record is a 403, never a crash.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
    pub identity: Identity,
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity_fut = Identity::from_request(req, payload);
        let req = req.clone();

        Box::pin(async move {
            let identity = identity_fut.await?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;
            let db = require_db(app_state)?;

            let user = users::find_by_email(db, identity.email())
                .await?
                .ok_or_else(AppError::forbidden_user_not_found)?;

            if !user.is_admin() {
                return Err(AppError::forbidden());
            }

            Ok(AdminUser { user, identity })
        })
    }
}
