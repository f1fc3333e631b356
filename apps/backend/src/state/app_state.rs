use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::services::payment_intent::PaymentIntents;

/// Application state containing shared resources
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Payment-intent client (Stripe in production, a hand mock in tests)
    pub payments: Arc<dyn PaymentIntents>,
}

impl AppState {
    /// Create a new AppState with the given database connection, security
    /// config and payment-intent client
    pub fn new(
        db: DatabaseConnection,
        security: SecurityConfig,
        payments: Arc<dyn PaymentIntents>,
    ) -> Self {
        Self {
            db: Some(db),
            security,
            payments,
        }
    }

    /// Create a new AppState without a database connection (for testing
    /// routes that never touch storage)
    pub fn without_db(security: SecurityConfig, payments: Arc<dyn PaymentIntents>) -> Self {
        Self {
            db: None,
            security,
            payments,
        }
    }
}
