use derive_more::derive::{Display, Error};

/// Failure taxonomy for the payment operations. Each variant is mapped
/// exactly once to an HTTP status at the web adapter; nothing is recovered
/// locally and no retries happen anywhere.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum PaymentError {
	#[display("Pet reference is invalid.")]
	InvalidPetReference,
	#[display("Customers service is unavailable.")]
	UpstreamUnavailable,
	#[display("Unexpected failure while validating the pet reference.")]
	UnknownFailure,
	#[display("Payment not found.")]
	PaymentNotFound,
	#[display("Store operation failed.")]
	StoreFailure,
}
