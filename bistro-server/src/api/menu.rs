use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use bistro_shared::menu::{MenuItem, MenuItemBody};
use bistro_shared::results::{DeleteResult, InsertResult, UpdateResult};
use mongodb::bson::oid::ObjectId;
use tracing::info;

use crate::auth::claims::AdminClaims;
use crate::models::menu::{self, MenuItemDoc};
use crate::models::{delete_result, insert_result, update_result};
use crate::response::{ServerAppResult, ServerResponse};
use crate::util::app_state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/featured-menu", get(featured_menu))
        .route("/menu", get(list_menu).post(create_menu_item))
        .route(
            "/menu/{id}",
            get(get_menu_item)
                .put(replace_menu_item)
                .delete(delete_menu_item),
        )
}

async fn featured_menu(State(state): State<AppState>) -> ServerAppResult<Vec<MenuItem>> {
    let items = MenuItemDoc::featured(&state.db).await?;
    Ok(ServerResponse::builder()
        .body(menu::from_vec(items))
        .ok()
        .build())
}

async fn list_menu(
    _admin: AdminClaims,
    State(state): State<AppState>,
) -> ServerAppResult<Vec<MenuItem>> {
    let items = MenuItemDoc::list_all(&state.db).await?;
    Ok(ServerResponse::builder()
        .body(menu::from_vec(items))
        .ok()
        .build())
}

/// Answers `null` when nothing has that id.
async fn get_menu_item(
    _admin: AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerAppResult<Option<MenuItem>> {
    let id = ObjectId::parse_str(&id)?;
    let item = MenuItemDoc::find_by_id(&state.db, &id).await?;
    Ok(ServerResponse::builder()
        .body(item.map(Into::into))
        .ok()
        .build())
}

async fn create_menu_item(
    AdminClaims(admin): AdminClaims,
    State(state): State<AppState>,
    Json(payload): Json<MenuItemBody>,
) -> ServerAppResult<InsertResult> {
    let res = insert_result(MenuItemDoc::create(&state.db, payload).await?);
    info!("{} added menu item {}", admin.email, res.inserted_id);
    Ok(ServerResponse::builder().body(res).ok().build())
}

async fn replace_menu_item(
    AdminClaims(admin): AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemBody>,
) -> ServerAppResult<UpdateResult> {
    let id = ObjectId::parse_str(&id)?;
    let res = update_result(MenuItemDoc::upsert(&state.db, &id, payload).await?);
    info!("{} replaced menu item {}", admin.email, id);
    Ok(ServerResponse::builder().body(res).ok().build())
}

async fn delete_menu_item(
    AdminClaims(admin): AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerAppResult<DeleteResult> {
    let id = ObjectId::parse_str(&id)?;
    let res = delete_result(MenuItemDoc::delete(&state.db, &id).await?);
    info!(
        "{} deleted menu item {} ({} removed)",
        admin.email, id, res.deleted_count
    );
    Ok(ServerResponse::builder().body(res).ok().build())
}
