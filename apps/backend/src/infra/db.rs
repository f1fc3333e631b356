use sea_orm::{Database, DatabaseConnection};

use crate::state::app_state::AppState;
use crate::AppError;

/// Connect to the database named by the given URL.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    Database::connect(url)
        .await
        .map_err(|e| AppError::config(format!("failed to connect to database: {e}")))
}

/// Borrow the pooled connection, failing cleanly when state was built
/// without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db
        .as_ref()
        .ok_or_else(|| AppError::internal("Database connection not available".to_string()))
}
