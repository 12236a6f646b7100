use std::future::{Ready, ready};

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use derive_more::derive::{Display, Error};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use log::{error, warn};
use serde::{Deserialize, Serialize};

/// Bearer-token gate. Token issuance lives elsewhere; this only checks the
/// signature, issuer, audience, and expiry of what the client presents.
#[derive(Clone)]
pub struct JwtAuthenticator {
	decoding_key: DecodingKey,
	validation:   Validation,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
	#[serde(default)]
	pub sub: Option<String>,
	pub exp: usize,
}

impl JwtAuthenticator {
	pub fn new(secret: &str, issuer: &str, audience: &str) -> Self {
		let mut validation = Validation::new(Algorithm::HS256);
		validation.set_issuer(&[issuer]);
		validation.set_audience(&[audience]);

		Self {
			decoding_key: DecodingKey::from_secret(secret.as_bytes()),
			validation,
		}
	}

	fn authenticate(&self, req: &HttpRequest) -> Result<Claims, AuthError> {
		let header = req
			.headers()
			.get(actix_web::http::header::AUTHORIZATION)
			.and_then(|h| h.to_str().ok())
			.ok_or(AuthError::MissingBearerToken)?;
		let token = header
			.strip_prefix("Bearer ")
			.ok_or(AuthError::MissingBearerToken)?;

		let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
			.map_err(|e| {
				warn!("Rejected bearer token: {e}");
				AuthError::InvalidToken
			})?;

		Ok(data.claims)
	}
}

/// Extractor for routes that require a valid bearer token.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
	type Error = AuthError;
	type Future = Ready<Result<Self, Self::Error>>;

	fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
		let result = match req.app_data::<web::Data<JwtAuthenticator>>() {
			Some(authenticator) => {
				authenticator.authenticate(req).map(AuthenticatedUser)
			}
			None => {
				error!("JwtAuthenticator is not registered in app data");
				Err(AuthError::MissingBearerToken)
			}
		};

		ready(result)
	}
}

#[derive(Serialize)]
struct AuthErrorResponse {
	error:   String,
	message: String,
}

#[derive(Debug, Display, Error)]
pub enum AuthError {
	#[display("Bearer token required")]
	MissingBearerToken,
	#[display("Invalid or expired token")]
	InvalidToken,
}

impl AuthError {
	pub fn name(&self) -> String {
		match self {
			AuthError::MissingBearerToken => "unauthorized".to_string(),
			AuthError::InvalidToken => "authentication_failed".to_string(),
		}
	}
}

impl actix_web::error::ResponseError for AuthError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(AuthErrorResponse {
				error:   self.name(),
				message: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		StatusCode::UNAUTHORIZED
	}
}
