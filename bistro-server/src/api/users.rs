use axum::extract::{Path, State};
use axum::routing::{delete, get, patch};
use axum::{Json, Router};
use bistro_shared::results::{CreateUserResult, DeleteResult, UpdateResult};
use bistro_shared::users::{AdminCheck, CreateUserBody, User};
use mongodb::bson::oid::ObjectId;
use tracing::info;

use crate::api::require_present;
use crate::auth::claims::{AdminClaims, Claims};
use crate::models::user::UserDoc;
use crate::models::{delete_result, update_result};
use crate::response::{ServerAppResult, ServerResponse};
use crate::util::app_state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", delete(delete_user))
        .route("/users/make-admin/{id}", patch(make_admin))
        .route("/users/admin/{email}", get(check_admin))
}

async fn list_users(
    _admin: AdminClaims,
    State(state): State<AppState>,
) -> ServerAppResult<Vec<User>> {
    let users = UserDoc::list_all(&state.db).await?;
    Ok(ServerResponse::builder().body(users).ok().build())
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserBody>,
) -> ServerAppResult<CreateUserResult> {
    require_present("email", &payload.email)?;
    let res = UserDoc::create(&state.db, payload).await?;
    Ok(ServerResponse::builder().body(res).ok().build())
}

async fn delete_user(
    AdminClaims(admin): AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerAppResult<DeleteResult> {
    let id = ObjectId::parse_str(&id)?;
    let res = delete_result(UserDoc::delete(&state.db, &id).await?);
    info!("{} deleted user {}", admin.email, id);
    Ok(ServerResponse::builder().body(res).ok().build())
}

async fn make_admin(
    AdminClaims(admin): AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerAppResult<UpdateResult> {
    let id = ObjectId::parse_str(&id)?;
    let res = update_result(UserDoc::make_admin(&state.db, &id).await?);
    info!("{} promoted user {} to admin", admin.email, id);
    Ok(ServerResponse::builder().body(res).ok().build())
}

async fn check_admin(
    claims: Claims,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ServerAppResult<AdminCheck> {
    claims.require_self(&email)?;
    let admin = UserDoc::is_admin(&state.db, &email).await?;
    Ok(ServerResponse::builder()
        .body(AdminCheck { admin })
        .ok()
        .build())
}
