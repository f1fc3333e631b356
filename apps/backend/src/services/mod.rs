pub mod payment_intent;
pub mod settlement;
pub mod stats;
