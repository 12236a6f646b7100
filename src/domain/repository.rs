use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::payment::Payment;

/// Keyed payment store. Upsert semantics: `put` overwrites by id.
#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	async fn get(
		&self,
		payment_id: &str,
	) -> Result<Option<Payment>, Box<dyn std::error::Error + Send>>;
	async fn put(
		&self,
		payment: Payment,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
	/// Every stored payment as one logical sequence. The underlying store
	/// paginates; the stream drives the cursor to completion so callers
	/// never see page boundaries. Finite, restartable per call.
	fn scan_all(
		&self,
	) -> BoxStream<'static, Result<Payment, Box<dyn std::error::Error + Send>>>;
	async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send>>;
}
