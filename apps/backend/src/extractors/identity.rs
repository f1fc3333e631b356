use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::jwt::{verify_token, Claims};
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;
use crate::AppError;

/// Verified caller identity: bearer token extracted and claims checked
/// against the configured secret. Purely stateless, no storage read.
#[derive(Debug, Clone)]
pub struct Identity {
    pub claims: Claims,
}

impl Identity {
    pub fn email(&self) -> &str {
        &self.claims.email
    }

    /// Self-scoped routes compare the authenticated subject against the
    /// requested subject, independent of role.
    pub fn require_self(&self, email: &str) -> Result<(), AppError> {
        if self.email() != email {
            return Err(AppError::unauthorized());
        }
        Ok(())
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let token_fut = AuthToken::from_request(req, payload);
        let req = req.clone();

        Box::pin(async move {
            let token = token_fut.await?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            let claims = verify_token(&token.token, &app_state.security)?;

            Ok(Identity { claims })
        })
    }
}
