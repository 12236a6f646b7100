pub mod http_pet_validator;
