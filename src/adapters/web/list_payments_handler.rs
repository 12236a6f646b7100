use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use log::warn;

use crate::adapters::web::auth::AuthenticatedUser;
use crate::adapters::web::errors::ApiError;
use crate::use_cases::dto::ListPaymentsQuery;
use crate::use_cases::errors::PaymentError;
use crate::use_cases::list_payments::ListPaymentsUseCase;

#[get("/owners/{owner_id}/pets/{pet_id}/payments")]
pub async fn list_payments(
	_user: AuthenticatedUser,
	path: web::Path<(i32, i32)>,
	list_payments_use_case: web::Data<ListPaymentsUseCase>,
) -> impl Responder {
	let (owner_id, pet_id) = path.into_inner();

	match list_payments_use_case
		.execute(ListPaymentsQuery { owner_id, pet_id })
		.await
	{
		Ok(payments) => HttpResponse::Ok().json(payments),
		Err(PaymentError::InvalidPetReference) => {
			warn!("Rejecting payment listing for pet {pet_id}");
			// Every validator failure on this path is a bare 400, unlike
			// the three-way mapping of the by-id route.
			HttpResponse::BadRequest().finish()
		}
		Err(e) => {
			warn!("Failed to list payments for pet {pet_id}: {e}");
			ApiError::from(e).error_response()
		}
	}
}
