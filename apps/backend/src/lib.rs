#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for public API
pub use auth::jwt::{mint_token, verify_token, Claims};
pub use error::AppError;
pub use extractors::admin_user::AdminUser;
pub use extractors::auth_token::AuthToken;
pub use extractors::identity::Identity;
pub use infra::db::{connect_db, require_db};
pub use middleware::cors::cors_middleware;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
