use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Token lifetime: 365 days, matching the login-once-a-year UX of the
/// storefront. There is no revocation list; expiry is the only termination.
pub const TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Claims included in our backend-issued access tokens.
///
/// The storefront sends whatever profile fields it has at login time, so
/// anything beyond the registered claims rides along in `extra` and comes
/// back verbatim on verification.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject email, the identity every guard keys on
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Mint a HS256 JWT with a 365-day TTL embedding the given claims.
pub fn mint_token(
    email: &str,
    extra: Map<String, Value>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let claims = Claims {
        email: email.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
        extra,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a JWT and return its claims.
///
/// Stateless: signature + expiry only, no storage lookup.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use serde_json::{json, Map};

    use super::{mint_token, verify_token, TOKEN_TTL_SECS};
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    fn extra_claims() -> Map<String, serde_json::Value> {
        let mut extra = Map::new();
        extra.insert("name".to_string(), json!("Ada Lovelace"));
        extra.insert("photo".to_string(), json!("https://example.com/ada.png"));
        extra
    }

    #[test]
    fn mint_and_verify_roundtrip_preserves_extra_claims() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
        let now = SystemTime::now();

        let token = mint_token("ada@example.com", extra_claims(), now, &security).unwrap();
        let claims = verify_token(&token, &security).unwrap();

        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.extra, extra_claims());
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        // 366 days ago, one day past the TTL
        let now = SystemTime::now() - Duration::from_secs((TOKEN_TTL_SECS + 24 * 60 * 60) as u64);
        let token = mint_token("ada@example.com", Map::new(), now, &security).unwrap();

        match verify_token(&token, &security) {
            Err(AppError::UnauthorizedExpiredJwt) => {}
            other => panic!("expected expired-JWT error, got {other:?}"),
        }
    }

    #[test]
    fn bad_signature_is_rejected() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token = mint_token(
            "ada@example.com",
            Map::new(),
            SystemTime::now(),
            &security_a,
        )
        .unwrap();

        let security_b = SecurityConfig::new("secret-B".as_bytes());
        match verify_token(&token, &security_b) {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("expected invalid-JWT error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_token_is_rejected() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        match verify_token("not-a-jwt", &security) {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("expected invalid-JWT error, got {other:?}"),
        }
    }
}
