/// One hash per payment, keyed `payment:{id}`.
pub const PAYMENT_KEY_PREFIX: &str = "payment:";
/// COUNT hint per SCAN round trip.
pub const SCAN_PAGE_SIZE: usize = 100;

pub fn payment_key(payment_id: &str) -> String {
	format!("{PAYMENT_KEY_PREFIX}{payment_id}")
}

pub fn payment_key_pattern() -> String {
	format!("{PAYMENT_KEY_PREFIX}*")
}
