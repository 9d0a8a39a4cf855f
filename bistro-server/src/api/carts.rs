use axum::extract::{Path, Query, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use bistro_shared::cart::{CartEntryBody, CartItem, CartQuery};
use bistro_shared::results::{DeleteResult, InsertResult};
use mongodb::bson::oid::ObjectId;

use crate::api::require_present;
use crate::models::cart::CartEntryDoc;
use crate::models::{delete_result, insert_result};
use crate::response::{ServerAppResult, ServerResponse};
use crate::util::app_state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/carts", get(list_cart).post(add_to_cart))
        .route("/carts/{id}", delete(remove_from_cart))
}

async fn list_cart(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> ServerAppResult<Vec<CartItem>> {
    require_present("email", &query.email)?;
    let items = CartEntryDoc::list_enriched(&state.db, &query.email).await?;
    Ok(ServerResponse::builder().body(items).ok().build())
}

async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<CartEntryBody>,
) -> ServerAppResult<InsertResult> {
    require_present("email", &payload.email)?;
    require_present("menuId", &payload.menu_id)?;
    let res = insert_result(CartEntryDoc::create(&state.db, payload).await?);
    Ok(ServerResponse::builder().body(res).ok().build())
}

async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerAppResult<DeleteResult> {
    let id = ObjectId::parse_str(&id)?;
    let res = delete_result(CartEntryDoc::delete(&state.db, &id).await?);
    Ok(ServerResponse::builder().body(res).ok().build())
}
