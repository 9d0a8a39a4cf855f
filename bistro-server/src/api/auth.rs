use axum::extract::State;
use axum::{Json, Router, routing::post};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use bistro_shared::results::Success;
use serde::Deserialize;
use tracing::info;

use crate::api::require_present;
use crate::auth::token::{SessionClaims, TOKEN_COOKIE, issue_token};
use crate::response::ServerResult;
use crate::util::app_state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/create-token", post(create_token))
        .route("/logout", post(logout))
}

/// Sign-in payload. Clients post the whole signed-in profile; only the email ends
/// up in the token.
#[derive(Debug, Deserialize)]
pub struct CreateTokenBody {
    pub email: String,
}

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(if secure { SameSite::None } else { SameSite::Lax })
        .build()
}

async fn create_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateTokenBody>,
) -> ServerResult<(CookieJar, Json<Success>)> {
    require_present("email", &payload.email)?;
    let token = issue_token(
        &SessionClaims::new(&payload.email),
        &state.config.token_secret,
    )?;
    info!("issued session token for {}", payload.email);

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Json(Success { success: true })))
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Success>) {
    // The token itself stays valid until it expires; only the browser forgets it.
    // Sent even when the request carried no token cookie.
    let mut cookie = session_cookie(String::new(), state.config.cookie_secure);
    cookie.make_removal();
    (jar.add(cookie), Json(Success { success: true }))
}
