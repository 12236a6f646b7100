use std::sync::Arc;

use actix_web::{App, test, web};
use petclinic_payment::adapters::web::get_payment_handler::get_payment;
use petclinic_payment::domain::pet_reference::PetReferenceOutcome;
use petclinic_payment::use_cases::get_payment::GetPaymentUseCase;

mod support;

use crate::support::fakes::{
	InMemoryPaymentRepository, StubPetReferenceValidator, payment,
};

fn use_case(
	validator: StubPetReferenceValidator,
	repository: &InMemoryPaymentRepository,
) -> GetPaymentUseCase {
	GetPaymentUseCase::new(Arc::new(validator), Arc::new(repository.clone()))
}

#[actix_web::test]
async fn test_get_payment_returns_stored_record() {
	let repository = InMemoryPaymentRepository::new();
	repository.insert(payment("pay-1", 2, 30.0));
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(use_case(
				StubPetReferenceValidator::valid(),
				&repository,
			)))
			.service(get_payment),
	)
	.await;

	let req = test::TestRequest::get()
		.uri("/owners/1/pets/2/payments/pay-1")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert!(resp.status().is_success());

	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(body["paymentId"], "pay-1");
	assert_eq!(body["petId"], 2);
	assert_eq!(body["totalAmount"], 30.0);
}

#[actix_web::test]
async fn test_get_payment_absent_is_not_found() {
	let repository = InMemoryPaymentRepository::new();
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(use_case(
				StubPetReferenceValidator::valid(),
				&repository,
			)))
			.service(get_payment),
	)
	.await;

	let req = test::TestRequest::get()
		.uri("/owners/1/pets/2/payments/missing")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_get_payment_pet_not_found_upstream_is_bad_request() {
	let repository = InMemoryPaymentRepository::new();
	repository.insert(payment("pay-1", 2, 30.0));
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(use_case(
				StubPetReferenceValidator::with(
					PetReferenceOutcome::NotFoundUpstream,
				),
				&repository,
			)))
			.service(get_payment),
	)
	.await;

	let req = test::TestRequest::get()
		.uri("/owners/1/pets/2/payments/pay-1")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 400);
	assert_eq!(repository.calls(), 0);
}

#[actix_web::test]
async fn test_get_payment_unreachable_upstream_is_service_unavailable() {
	let repository = InMemoryPaymentRepository::new();
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(use_case(
				StubPetReferenceValidator::with(
					PetReferenceOutcome::Unreachable,
				),
				&repository,
			)))
			.service(get_payment),
	)
	.await;

	let req = test::TestRequest::get()
		.uri("/owners/1/pets/2/payments/pay-1")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 503);
	assert_eq!(repository.calls(), 0);
}

#[actix_web::test]
async fn test_get_payment_unknown_failure_is_internal_error() {
	let repository = InMemoryPaymentRepository::new();
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(use_case(
				StubPetReferenceValidator::with(
					PetReferenceOutcome::UnknownFailure,
				),
				&repository,
			)))
			.service(get_payment),
	)
	.await;

	let req = test::TestRequest::get()
		.uri("/owners/1/pets/2/payments/pay-1")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 500);
	assert_eq!(repository.calls(), 0);
}
