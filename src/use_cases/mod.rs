pub mod create_payment;
pub mod dto;
pub mod errors;
pub mod get_payment;
pub mod list_payments;
pub mod purge_payments;
