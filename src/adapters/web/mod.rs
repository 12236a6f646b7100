pub mod auth;
pub mod clean_db_handler;
pub mod create_payment_handler;
pub mod errors;
pub mod get_payment_handler;
pub mod health_handler;
pub mod list_payments_handler;
pub mod schema;
