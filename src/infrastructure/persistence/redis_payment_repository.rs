use std::collections::HashMap;

use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use futures::{StreamExt, TryStreamExt};
use log::warn;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::redis::{
	PAYMENT_KEY_PREFIX, SCAN_PAGE_SIZE, payment_key, payment_key_pattern,
};

const FIELD_PET_ID: &str = "pet_id";
const FIELD_PAYMENT_DATE: &str = "payment_date";
const FIELD_AMOUNT: &str = "amount";
const FIELD_NOTES: &str = "notes";

type StoreError = Box<dyn std::error::Error + Send>;

/// Payment store on redis: one hash per payment, scans driven by the SCAN
/// cursor. No caching and no retries at this layer; failures propagate.
#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

enum ScanState {
	Start,
	Page(MultiplexedConnection, u64),
	Done,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

fn parse_payment(
	id: String,
	map: &HashMap<String, String>,
) -> Result<Payment, StoreError> {
	let pet_id = map
		.get(FIELD_PET_ID)
		.and_then(|s| s.parse().ok())
		.ok_or_else(|| field_error(&id, FIELD_PET_ID))?;
	let payment_date = map
		.get(FIELD_PAYMENT_DATE)
		.and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
		.ok_or_else(|| field_error(&id, FIELD_PAYMENT_DATE))?;
	let amount = map
		.get(FIELD_AMOUNT)
		.and_then(|s| s.parse().ok())
		.ok_or_else(|| field_error(&id, FIELD_AMOUNT))?;
	let notes = map.get(FIELD_NOTES).cloned();

	Ok(Payment {
		id,
		pet_id,
		payment_date,
		amount,
		notes,
	})
}

fn field_error(id: &str, field: &str) -> StoreError {
	Box::new(std::io::Error::new(
		std::io::ErrorKind::InvalidData,
		format!("payment {id}: missing or invalid field {field}"),
	))
}

async fn scan_page(
	con: &mut MultiplexedConnection,
	cursor: u64,
) -> Result<(u64, Vec<Payment>), StoreError> {
	let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
		.arg(cursor)
		.arg("MATCH")
		.arg(payment_key_pattern())
		.arg("COUNT")
		.arg(SCAN_PAGE_SIZE)
		.query_async(con)
		.await
		.map_err(|e| Box::new(e) as StoreError)?;

	let mut page = Vec::with_capacity(keys.len());
	for key in keys {
		let map: HashMap<String, String> = con
			.hgetall(&key)
			.await
			.map_err(|e| Box::new(e) as StoreError)?;
		let id = key
			.strip_prefix(PAYMENT_KEY_PREFIX)
			.unwrap_or(&key)
			.to_string();
		match parse_payment(id, &map) {
			Ok(payment) => page.push(payment),
			// Skip malformed records
			Err(e) => warn!("Skipping unreadable payment record {key}: {e}"),
		}
	}

	Ok((next_cursor, page))
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn get(
		&self,
		payment_id: &str,
	) -> Result<Option<Payment>, StoreError> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as StoreError)?;

		let map: HashMap<String, String> = con
			.hgetall(payment_key(payment_id))
			.await
			.map_err(|e| Box::new(e) as StoreError)?;

		if map.is_empty() {
			return Ok(None);
		}

		parse_payment(payment_id.to_string(), &map).map(Some)
	}

	async fn put(&self, payment: Payment) -> Result<(), StoreError> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as StoreError)?;

		let key = payment_key(&payment.id);
		let payment_date = payment
			.payment_date
			.format(&Rfc3339)
			.map_err(|e| Box::new(e) as StoreError)?;

		let mut fields: Vec<(&str, String)> = vec![
			(FIELD_PET_ID, payment.pet_id.to_string()),
			(FIELD_PAYMENT_DATE, payment_date),
			(FIELD_AMOUNT, payment.amount.to_string()),
		];
		if let Some(notes) = payment.notes {
			fields.push((FIELD_NOTES, notes));
		}

		// Delete first so a re-used id never keeps stale fields.
		redis::pipe()
			.atomic()
			.del(&key)
			.ignore()
			.hset_multiple(&key, &fields)
			.ignore()
			.query_async::<()>(&mut con)
			.await
			.map_err(|e| Box::new(e) as StoreError)?;

		Ok(())
	}

	fn scan_all(&self) -> BoxStream<'static, Result<Payment, StoreError>> {
		let client = self.client.clone();

		stream::try_unfold(ScanState::Start, move |state| {
			let client = client.clone();
			async move {
				let (mut con, cursor) = match state {
					ScanState::Start => {
						let con = client
							.get_multiplexed_async_connection()
							.await
							.map_err(|e| Box::new(e) as StoreError)?;
						(con, 0)
					}
					ScanState::Page(con, cursor) => (con, cursor),
					ScanState::Done => return Ok(None),
				};

				let (next_cursor, page) = scan_page(&mut con, cursor).await?;
				let next_state = if next_cursor == 0 {
					ScanState::Done
				} else {
					ScanState::Page(con, next_cursor)
				};

				Ok(Some((page, next_state)))
			}
		})
		.map_ok(|page| stream::iter(page.into_iter().map(Ok::<_, StoreError>)))
		.try_flatten()
		.boxed()
	}

	async fn clear(&self) -> Result<(), StoreError> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as StoreError)?;

		let mut cursor = 0u64;
		loop {
			let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
				.arg(cursor)
				.arg("MATCH")
				.arg(payment_key_pattern())
				.arg("COUNT")
				.arg(SCAN_PAGE_SIZE)
				.query_async(&mut con)
				.await
				.map_err(|e| Box::new(e) as StoreError)?;

			if !keys.is_empty() {
				con.del::<_, ()>(keys)
					.await
					.map_err(|e| Box::new(e) as StoreError)?;
			}

			if next_cursor == 0 {
				break;
			}
			cursor = next_cursor;
		}

		Ok(())
	}
}
