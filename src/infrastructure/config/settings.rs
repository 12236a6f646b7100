use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub customers_service_url: String,
	pub server_port: u16,
	pub server_keepalive: u64,
	pub jwt_secret: String,
	pub jwt_issuer: String,
	pub jwt_audience: String,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
