pub mod payment;
pub mod pet_reference;
pub mod repository;
