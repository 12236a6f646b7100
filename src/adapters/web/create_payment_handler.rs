use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PaymentRequest;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dto::CreatePaymentCommand;

#[post("/owners/{owner_id}/pets/{pet_id}/payments")]
pub async fn create_payment(
	path: web::Path<(i32, i32)>,
	payload: web::Json<PaymentRequest>,
	create_payment_use_case: web::Data<CreatePaymentUseCase>,
) -> impl Responder {
	let (owner_id, pet_id) = path.into_inner();
	let body = payload.into_inner();

	// body.pet_id is deliberately not consulted; the route wins.
	let command = CreatePaymentCommand {
		owner_id,
		pet_id,
		payment_id: body.payment_id,
		payment_date: body.payment_date,
		amount: body.total_amount,
		notes: body.notes,
	};

	match create_payment_use_case.execute(command).await {
		Ok(payment) => {
			info!("Payment {} recorded for pet {pet_id}", payment.id);
			HttpResponse::Ok().json(payment)
		}
		Err(e) => {
			warn!("Rejecting payment creation for pet {pet_id}: {e}");
			ApiError::from(e).error_response()
		}
	}
}
