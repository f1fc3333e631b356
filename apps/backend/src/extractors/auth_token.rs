use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};

use crate::AppError;

/// Bearer token extracted from the Authorization header.
///
/// Absence or a malformed header is the missing-credential case, reported
/// with a code distinct from an invalid token.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or_else(AppError::unauthorized_missing_bearer)?;

            let auth_value = auth_header
                .to_str()
                .map_err(|_| AppError::unauthorized_missing_bearer())?;

            // Parse "Bearer <token>" format
            let parts: Vec<&str> = auth_value.split_whitespace().collect();
            if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
                return Err(AppError::unauthorized_missing_bearer());
            }

            Ok(AuthToken {
                token: parts[1].to_string(),
            })
        })
    }
}
