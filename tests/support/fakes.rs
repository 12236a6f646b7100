use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use jsonwebtoken::{EncodingKey, Header, encode};
use petclinic_payment::adapters::web::auth::JwtAuthenticator;
use petclinic_payment::domain::payment::Payment;
use petclinic_payment::domain::pet_reference::{
	PetReferenceOutcome, PetReferenceValidator,
};
use petclinic_payment::domain::repository::PaymentRepository;
use time::OffsetDateTime;

type StoreError = Box<dyn std::error::Error + Send>;

/// In-memory payment store doubling as a spy: `calls()` counts every store
/// operation so tests can assert the store was never touched.
#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
	records:    Arc<Mutex<HashMap<String, Payment>>>,
	call_count: Arc<AtomicUsize>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, payment: Payment) {
		self.records
			.lock()
			.unwrap()
			.insert(payment.id.clone(), payment);
	}

	pub fn all(&self) -> Vec<Payment> {
		self.records.lock().unwrap().values().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.records.lock().unwrap().len()
	}

	pub fn calls(&self) -> usize {
		self.call_count.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn get(
		&self,
		payment_id: &str,
	) -> Result<Option<Payment>, StoreError> {
		self.call_count.fetch_add(1, Ordering::SeqCst);
		Ok(self.records.lock().unwrap().get(payment_id).cloned())
	}

	async fn put(&self, payment: Payment) -> Result<(), StoreError> {
		self.call_count.fetch_add(1, Ordering::SeqCst);
		self.records
			.lock()
			.unwrap()
			.insert(payment.id.clone(), payment);
		Ok(())
	}

	fn scan_all(&self) -> BoxStream<'static, Result<Payment, StoreError>> {
		self.call_count.fetch_add(1, Ordering::SeqCst);
		stream::iter(self.all().into_iter().map(Ok)).boxed()
	}

	async fn clear(&self) -> Result<(), StoreError> {
		self.call_count.fetch_add(1, Ordering::SeqCst);
		self.records.lock().unwrap().clear();
		Ok(())
	}
}

/// Store whose every operation fails, simulating an outage.
#[derive(Clone, Default)]
pub struct UnavailablePaymentRepository;

impl UnavailablePaymentRepository {
	pub fn new() -> Self {
		Self
	}
}

fn store_down() -> StoreError {
	Box::new(std::io::Error::new(
		std::io::ErrorKind::ConnectionRefused,
		"store unavailable",
	))
}

#[async_trait]
impl PaymentRepository for UnavailablePaymentRepository {
	async fn get(
		&self,
		_payment_id: &str,
	) -> Result<Option<Payment>, StoreError> {
		Err(store_down())
	}

	async fn put(&self, _payment: Payment) -> Result<(), StoreError> {
		Err(store_down())
	}

	fn scan_all(&self) -> BoxStream<'static, Result<Payment, StoreError>> {
		stream::iter(vec![Err::<Payment, StoreError>(store_down())]).boxed()
	}

	async fn clear(&self) -> Result<(), StoreError> {
		Err(store_down())
	}
}

#[derive(Clone)]
pub struct StubPetReferenceValidator {
	outcome: PetReferenceOutcome,
}

impl StubPetReferenceValidator {
	pub fn with(outcome: PetReferenceOutcome) -> Self {
		Self { outcome }
	}

	pub fn valid() -> Self {
		Self::with(PetReferenceOutcome::Valid)
	}
}

#[async_trait]
impl PetReferenceValidator for StubPetReferenceValidator {
	async fn validate(
		&self,
		_owner_id: i32,
		_pet_id: i32,
	) -> PetReferenceOutcome {
		self.outcome
	}
}

pub fn payment(id: &str, pet_id: i32, amount: f64) -> Payment {
	Payment {
		id:           id.to_string(),
		pet_id,
		payment_date: OffsetDateTime::now_utc(),
		amount,
		notes:        None,
	}
}

pub const JWT_SECRET: &str = "test-secret";
pub const JWT_ISSUER: &str = "petclinic";
pub const JWT_AUDIENCE: &str = "petclinic-clients";

pub fn test_authenticator() -> JwtAuthenticator {
	JwtAuthenticator::new(JWT_SECRET, JWT_ISSUER, JWT_AUDIENCE)
}

pub fn mint_token() -> String {
	let claims = serde_json::json!({
		"sub": "owner-1",
		"iss": JWT_ISSUER,
		"aud": JWT_AUDIENCE,
		"exp": OffsetDateTime::now_utc().unix_timestamp() + 3600,
	});
	encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(JWT_SECRET.as_bytes()),
	)
	.unwrap()
}
