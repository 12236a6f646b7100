use std::sync::Arc;

use petclinic_payment::infrastructure::config::settings::Config;
use petclinic_payment::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config =
		Arc::new(Config::load().expect("Failed to load configuration"));
	run(config).await
}
