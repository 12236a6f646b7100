use std::sync::Arc;

use log::error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::payment::Payment;
use crate::domain::pet_reference::PetReferenceValidator;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::CreatePaymentCommand;
use crate::use_cases::errors::PaymentError;

#[derive(Clone)]
pub struct CreatePaymentUseCase {
	validator:  Arc<dyn PetReferenceValidator>,
	repository: Arc<dyn PaymentRepository>,
}

impl CreatePaymentUseCase {
	pub fn new(
		validator: Arc<dyn PetReferenceValidator>,
		repository: Arc<dyn PaymentRepository>,
	) -> Self {
		Self {
			validator,
			repository,
		}
	}

	/// Store a new payment. The pet_id always comes from the route, never
	/// from the body; a missing id gets a generated UUID; a missing
	/// payment_date defaults to now. Re-using a supplied id overwrites the
	/// previous record (last put wins).
	pub async fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<Payment, PaymentError> {
		let outcome = self
			.validator
			.validate(command.owner_id, command.pet_id)
			.await;
		if !outcome.is_valid() {
			return Err(PaymentError::InvalidPetReference);
		}

		let payment = Payment {
			id: command
				.payment_id
				.unwrap_or_else(|| Uuid::new_v4().to_string()),
			pet_id: command.pet_id,
			payment_date: command
				.payment_date
				.unwrap_or_else(OffsetDateTime::now_utc),
			amount: command.amount,
			notes: command.notes,
		};

		match self.repository.put(payment.clone()).await {
			Ok(()) => Ok(payment),
			Err(e) => {
				error!("Failed to store payment {}: {e}", payment.id);
				Err(PaymentError::StoreFailure)
			}
		}
	}
}
