//! Request gates.
//!
//! `Claims` is the session gate: it reads the `token` cookie and verifies it.
//! `AdminClaims` runs that gate first and then requires the stored user behind the
//! token to have the admin role. Handlers opt in by taking one of them as their
//! first argument, so a rejected request never reaches the handler body.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::{
    auth::token::{SessionClaims, TOKEN_COOKIE, verify_token},
    config::AppConfig,
    db::Mongo,
    models::user::UserDoc,
    response::{ServerError, ServerResult},
    util::app_state::AppState,
};

pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized Access";
pub const FORBIDDEN_ACCESS: &str = "Forbidden Access";

#[derive(Debug, Clone)]
pub struct Claims {
    pub email: String,
}

impl From<SessionClaims> for Claims {
    fn from(claims: SessionClaims) -> Self {
        Self {
            email: claims.email,
        }
    }
}

impl FromRequestParts<AppState> for Claims {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Claims::from_cookies(&jar, &state.config)
    }
}

impl Claims {
    pub fn from_cookies(jar: &CookieJar, config: &Arc<AppConfig>) -> ServerResult<Self> {
        let token = jar
            .get(TOKEN_COOKIE)
            .map(|c| c.value())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ServerError::missing_token(UNAUTHORIZED_ACCESS))?;

        let claims = verify_token(token, &config.token_secret)?;
        Ok(claims.into())
    }

    /// Only the owner of `email` may ask about it.
    pub fn require_self(&self, email: &str) -> ServerResult<()> {
        if self.email != email {
            debug!("{} asked about {}", self.email, email);
            return Err(ServerError::unauthorized(UNAUTHORIZED_ACCESS));
        }
        Ok(())
    }

    pub async fn require_admin(self, db: &Arc<Mongo>) -> ServerResult<AdminClaims> {
        if !UserDoc::is_admin(db, &self.email).await? {
            return Err(ServerError::forbidden(FORBIDDEN_ACCESS));
        }
        Ok(AdminClaims(self))
    }
}

/// Claims of a caller whose stored role is admin.
#[derive(Debug, Clone)]
pub struct AdminClaims(pub Claims);

impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;
        claims.require_admin(&state.db).await
    }
}
