pub mod admin_user;
pub mod auth_token;
pub mod identity;
