use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::response::{ServerError, ServerResult};

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Session lifetime.
pub const TOKEN_TTL_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(email: &str) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        }
    }
}

pub fn issue_token(claims: &SessionClaims, secret: &str) -> ServerResult<String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ServerError::internal_error(&format!("Failed to sign token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> ServerResult<SessionClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => ServerError::expired_token("Unauthorized Access"),
        _ => ServerError::invalid_token("Unauthorized Access"),
    })
}
