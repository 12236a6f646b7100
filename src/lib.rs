pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

use crate::adapters::web::auth::JwtAuthenticator;
use crate::adapters::web::clean_db_handler::clean_db;
use crate::adapters::web::create_payment_handler::create_payment;
use crate::adapters::web::get_payment_handler::get_payment;
use crate::adapters::web::health_handler::healthz;
use crate::adapters::web::list_payments_handler::list_payments;
use crate::domain::pet_reference::PetReferenceValidator;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::customers::http_pet_validator::HttpPetReferenceValidator;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::list_payments::ListPaymentsUseCase;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let redis_client =
		redis::Client::open(config.redis_url.clone()).expect("Invalid Redis URL");
	let http_client = Client::new();

	// Everything is constructed once here and handed to the handlers
	// explicitly; no ambient lookup.
	let validator: Arc<dyn PetReferenceValidator> =
		Arc::new(HttpPetReferenceValidator::new(
			http_client,
			config.customers_service_url.clone(),
		));
	let repository: Arc<dyn PaymentRepository> =
		Arc::new(RedisPaymentRepository::new(redis_client));

	let list_payments_use_case =
		ListPaymentsUseCase::new(validator.clone(), repository.clone());
	let get_payment_use_case =
		GetPaymentUseCase::new(validator.clone(), repository.clone());
	let create_payment_use_case =
		CreatePaymentUseCase::new(validator.clone(), repository.clone());
	let purge_payments_use_case = PurgePaymentsUseCase::new(repository);
	let authenticator = JwtAuthenticator::new(
		&config.jwt_secret,
		&config.jwt_issuer,
		&config.jwt_audience,
	);

	let keepalive = Duration::from_secs(config.server_keepalive);
	let port = config.server_port;

	info!("Starting payment service on 0.0.0.0:{port}...");
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(authenticator.clone()))
			.app_data(web::Data::new(list_payments_use_case.clone()))
			.app_data(web::Data::new(get_payment_use_case.clone()))
			.app_data(web::Data::new(create_payment_use_case.clone()))
			.app_data(web::Data::new(purge_payments_use_case.clone()))
			.service(list_payments)
			.service(get_payment)
			.service(create_payment)
			.service(clean_db)
			.service(healthz)
	})
	.keep_alive(keepalive)
	.bind(("0.0.0.0", port))?
	.run()
	.await
}
