use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ListPaymentsQuery {
	pub owner_id: i32,
	pub pet_id:   i32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GetPaymentQuery {
	pub owner_id:   i32,
	pub pet_id:     i32,
	pub payment_id: String,
}

#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
	pub owner_id:     i32,
	pub pet_id:       i32,
	pub payment_id:   Option<String>,
	pub payment_date: Option<OffsetDateTime>,
	pub amount:       f64,
	pub notes:        Option<String>,
}
