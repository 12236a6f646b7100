use actix_web::{HttpResponse, Responder, ResponseError, delete, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

#[delete("/clean-db")]
pub async fn clean_db(
	purge_payments_use_case: web::Data<PurgePaymentsUseCase>,
) -> impl Responder {
	info!("Received request to clean the payment store");

	match purge_payments_use_case.execute().await {
		Ok(()) => HttpResponse::Ok().finish(),
		Err(e) => {
			error!("Failed to clean the payment store: {e}");
			ApiError::from(e).error_response()
		}
	}
}
