use async_trait::async_trait;
use log::{error, warn};
use reqwest::{Client, StatusCode};

use crate::domain::pet_reference::{
	PetReferenceOutcome, PetReferenceValidator,
};

/// Asks the customers service whether a pet exists for an owner and
/// classifies the answer structurally: any response at all settles the
/// question, a transport failure means the upstream is down. No retries.
#[derive(Clone)]
pub struct HttpPetReferenceValidator {
	http_client: Client,
	base_url:    String,
}

impl HttpPetReferenceValidator {
	pub fn new(http_client: Client, base_url: String) -> Self {
		Self {
			http_client,
			base_url,
		}
	}

	fn pet_url(&self, owner_id: i32, pet_id: i32) -> String {
		format!(
			"{}/owners/{owner_id}/pets/{pet_id}",
			self.base_url.trim_end_matches('/')
		)
	}
}

fn classify_status(status: StatusCode) -> PetReferenceOutcome {
	if status.is_success() {
		PetReferenceOutcome::Valid
	} else {
		PetReferenceOutcome::NotFoundUpstream
	}
}

fn is_transport_error(e: &reqwest::Error) -> bool {
	e.is_connect() || e.is_timeout() || e.is_request()
}

#[async_trait]
impl PetReferenceValidator for HttpPetReferenceValidator {
	async fn validate(
		&self,
		owner_id: i32,
		pet_id: i32,
	) -> PetReferenceOutcome {
		match self
			.http_client
			.get(self.pet_url(owner_id, pet_id))
			.send()
			.await
		{
			Ok(resp) => {
				let outcome = classify_status(resp.status());
				if !outcome.is_valid() {
					warn!(
						"Customers service rejected pet {pet_id} for owner \
						 {owner_id}: {}",
						resp.status()
					);
				}
				outcome
			}
			Err(e) if is_transport_error(&e) => {
				error!("Customers service unreachable: {e}");
				PetReferenceOutcome::Unreachable
			}
			Err(e) => {
				error!("Unexpected error calling customers service: {e}");
				PetReferenceOutcome::UnknownFailure
			}
		}
	}
}
