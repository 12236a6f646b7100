use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of POST /owners/{owner_id}/pets/{pet_id}/payments. Everything but
/// the amount is optional; `petId` is accepted but ignored in favor of the
/// route.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
	#[serde(rename = "paymentId", default)]
	pub payment_id:   Option<String>,
	#[serde(rename = "petId", default)]
	pub pet_id:       Option<i32>,
	#[serde(
		rename = "paymentDate",
		with = "time::serde::rfc3339::option",
		default
	)]
	pub payment_date: Option<OffsetDateTime>,
	#[serde(rename = "totalAmount")]
	pub total_amount: f64,
	#[serde(default)]
	pub notes:        Option<String>,
}
