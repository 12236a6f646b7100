use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A payment recorded against a pet.
///
/// `amount` accepts any finite value; the service does not reject negative
/// totals.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Payment {
	#[serde(rename = "paymentId")]
	pub id:           String,
	#[serde(rename = "petId")]
	pub pet_id:       i32,
	#[serde(rename = "paymentDate", with = "time::serde::rfc3339")]
	pub payment_date: OffsetDateTime,
	#[serde(rename = "totalAmount")]
	pub amount:       f64,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub notes:        Option<String>,
}
