// src/auth/auth_middleware.rs

use actix_web::{dev::Payload, error::InternalError, web, FromRequest, HttpRequest, HttpResponse};
use futures::future::{ready, Ready};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use super::auth_structs::{CallerContext, Claims};
use crate::shared::shared_structs::MessageResponse;
use crate::AppState;

fn unauthorized(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(MessageResponse::new(message)),
    )
    .into()
}

/// Reads the `Authorization: Bearer <token>` header and validates the token
/// (HS256, expiry enforced) against the configured secret.
pub fn caller_from_request(
    req: &HttpRequest,
    jwt_secret: &str,
) -> Result<CallerContext, actix_web::Error> {
    let header_value = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| unauthorized("Missing authentication token."))?;

    let header_str = header_value
        .to_str()
        .map_err(|_| unauthorized("Invalid authentication token."))?;

    let token = header_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid token format. Expected 'Bearer <token>'."))?;

    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = ?e, "rejected bearer token");
        let message = match e.kind() {
            ErrorKind::ExpiredSignature => "Token expired.",
            ErrorKind::InvalidSignature => "Invalid token signature.",
            ErrorKind::InvalidToken => "Malformed token.",
            _ => "Invalid authentication token.",
        };
        unauthorized(message)
    })?;

    Ok(CallerContext::from(token_data.claims))
}

impl FromRequest for CallerContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState is not registered; cannot validate bearer token");
            return ready(Err(unauthorized("Server configuration error.")));
        };

        ready(caller_from_request(req, &state.jwt_secret))
    }
}
