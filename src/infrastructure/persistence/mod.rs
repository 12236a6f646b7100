pub mod redis_payment_repository;
