use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

use crate::use_cases::errors::PaymentError;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

/// HTTP mapping of the workflow failures. Each `PaymentError` variant maps
/// to exactly one status; no internal detail leaks into the body.
#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Pet reference is invalid.")]
	InvalidPetReference,
	#[display("Customers service is unavailable.")]
	UpstreamUnavailable,
	#[display("Payment not found.")]
	PaymentNotFound,
	#[display("Unexpected error while validating the pet reference.")]
	UnknownFailure,
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::InvalidPetReference => "Bad Request".to_string(),
			ApiError::UpstreamUnavailable => {
				"Service Unavailable".to_string()
			}
			ApiError::PaymentNotFound => "Not Found".to_string(),
			ApiError::UnknownFailure => "Internal Server Error".to_string(),
			ApiError::InternalServerError => {
				"Internal Server Error".to_string()
			}
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.to_string(),
				message:     self.name(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::InvalidPetReference => StatusCode::BAD_REQUEST,
			ApiError::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
			ApiError::PaymentNotFound => StatusCode::NOT_FOUND,
			ApiError::UnknownFailure => StatusCode::INTERNAL_SERVER_ERROR,
			ApiError::InternalServerError => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl From<PaymentError> for ApiError {
	fn from(e: PaymentError) -> Self {
		match e {
			PaymentError::InvalidPetReference => ApiError::InvalidPetReference,
			PaymentError::UpstreamUnavailable => ApiError::UpstreamUnavailable,
			PaymentError::UnknownFailure => ApiError::UnknownFailure,
			PaymentError::PaymentNotFound => ApiError::PaymentNotFound,
			PaymentError::StoreFailure => ApiError::InternalServerError,
		}
	}
}
