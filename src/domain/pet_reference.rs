use async_trait::async_trait;

/// Result of checking an owner/pet pair against the customers service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetReferenceOutcome {
	/// The customers service confirmed the pet exists for that owner.
	Valid,
	/// The customers service answered, but not with success.
	NotFoundUpstream,
	/// The customers service could not be reached.
	Unreachable,
	/// Anything else went wrong while asking.
	UnknownFailure,
}

impl PetReferenceOutcome {
	pub fn is_valid(&self) -> bool {
		matches!(self, PetReferenceOutcome::Valid)
	}
}

#[async_trait]
pub trait PetReferenceValidator: Send + Sync + 'static {
	async fn validate(
		&self,
		owner_id: i32,
		pet_id: i32,
	) -> PetReferenceOutcome;
}
