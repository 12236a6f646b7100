use std::sync::Arc;

use log::error;

use crate::domain::payment::Payment;
use crate::domain::pet_reference::{
	PetReferenceOutcome, PetReferenceValidator,
};
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::GetPaymentQuery;
use crate::use_cases::errors::PaymentError;

#[derive(Clone)]
pub struct GetPaymentUseCase {
	validator:  Arc<dyn PetReferenceValidator>,
	repository: Arc<dyn PaymentRepository>,
}

impl GetPaymentUseCase {
	pub fn new(
		validator: Arc<dyn PetReferenceValidator>,
		repository: Arc<dyn PaymentRepository>,
	) -> Self {
		Self {
			validator,
			repository,
		}
	}

	/// Fetch a payment by id after validating the pet reference. The stored
	/// record's pet_id is not cross-checked against the route's.
	pub async fn execute(
		&self,
		query: GetPaymentQuery,
	) -> Result<Payment, PaymentError> {
		match self
			.validator
			.validate(query.owner_id, query.pet_id)
			.await
		{
			PetReferenceOutcome::Valid => {}
			PetReferenceOutcome::NotFoundUpstream => {
				return Err(PaymentError::InvalidPetReference);
			}
			PetReferenceOutcome::Unreachable => {
				return Err(PaymentError::UpstreamUnavailable);
			}
			PetReferenceOutcome::UnknownFailure => {
				return Err(PaymentError::UnknownFailure);
			}
		}

		match self.repository.get(&query.payment_id).await {
			Ok(Some(payment)) => Ok(payment),
			Ok(None) => Err(PaymentError::PaymentNotFound),
			Err(e) => {
				error!("Failed to load payment {}: {e}", query.payment_id);
				Err(PaymentError::StoreFailure)
			}
		}
	}
}
