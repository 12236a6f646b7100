use std::sync::Arc;

use log::error;

use crate::domain::repository::PaymentRepository;
use crate::use_cases::errors::PaymentError;

#[derive(Clone)]
pub struct PurgePaymentsUseCase {
	repository: Arc<dyn PaymentRepository>,
}

impl PurgePaymentsUseCase {
	pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
		Self { repository }
	}

	/// Wipe every stored payment. Administrative, intended for test/reset
	/// environments; no validation happens here.
	pub async fn execute(&self) -> Result<(), PaymentError> {
		self.repository.clear().await.map_err(|e| {
			error!("Failed to purge payments: {e}");
			PaymentError::StoreFailure
		})
	}
}
