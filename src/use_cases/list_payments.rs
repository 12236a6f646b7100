use std::sync::Arc;

use futures::TryStreamExt;
use log::error;

use crate::domain::payment::Payment;
use crate::domain::pet_reference::PetReferenceValidator;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::ListPaymentsQuery;
use crate::use_cases::errors::PaymentError;

#[derive(Clone)]
pub struct ListPaymentsUseCase {
	validator:  Arc<dyn PetReferenceValidator>,
	repository: Arc<dyn PaymentRepository>,
}

impl ListPaymentsUseCase {
	pub fn new(
		validator: Arc<dyn PetReferenceValidator>,
		repository: Arc<dyn PaymentRepository>,
	) -> Self {
		Self {
			validator,
			repository,
		}
	}

	/// Payments for one pet, in store-scan order. The order is not stable
	/// across calls. Every validator failure collapses into
	/// `InvalidPetReference` on this path, unlike the three-way get-by-id
	/// mapping.
	pub async fn execute(
		&self,
		query: ListPaymentsQuery,
	) -> Result<Vec<Payment>, PaymentError> {
		let outcome = self
			.validator
			.validate(query.owner_id, query.pet_id)
			.await;
		if !outcome.is_valid() {
			return Err(PaymentError::InvalidPetReference);
		}

		let mut scan = self.repository.scan_all();
		let mut payments = Vec::new();
		loop {
			match scan.try_next().await {
				Ok(Some(payment)) => {
					if payment.pet_id == query.pet_id {
						payments.push(payment);
					}
				}
				Ok(None) => break,
				Err(e) => {
					error!("Failed to scan payments: {e}");
					return Err(PaymentError::StoreFailure);
				}
			}
		}

		Ok(payments)
	}
}
