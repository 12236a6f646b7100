use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use log::warn;

use crate::adapters::web::errors::ApiError;
use crate::use_cases::dto::GetPaymentQuery;
use crate::use_cases::get_payment::GetPaymentUseCase;

#[get("/owners/{owner_id}/pets/{pet_id}/payments/{payment_id}")]
pub async fn get_payment(
	path: web::Path<(i32, i32, String)>,
	get_payment_use_case: web::Data<GetPaymentUseCase>,
) -> impl Responder {
	let (owner_id, pet_id, payment_id) = path.into_inner();

	match get_payment_use_case
		.execute(GetPaymentQuery {
			owner_id,
			pet_id,
			payment_id,
		})
		.await
	{
		Ok(payment) => HttpResponse::Ok().json(payment),
		Err(e) => {
			warn!("Failed to fetch payment for pet {pet_id}: {e}");
			ApiError::from(e).error_response()
		}
	}
}
