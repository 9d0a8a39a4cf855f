use std::sync::Arc;

use bistro_shared::cart::{CartEntryBody, CartItem};
use futures::{TryStreamExt, future::try_join_all};
use mongodb::{
    bson::{doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult},
};
use serde::{Deserialize, Serialize};

use crate::{db::Mongo, models::menu::MenuItemDoc, response::ServerResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntryDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Owner.
    pub email: String,
    /// Hex id of the referenced menu item. Not checked on insert.
    pub menu_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl From<CartEntryBody> for CartEntryDoc {
    fn from(body: CartEntryBody) -> Self {
        CartEntryDoc {
            id: None,
            email: body.email,
            menu_id: body.menu_id,
            name: body.name,
            image: body.image,
            price: body.price,
        }
    }
}

/// Overlays a cart entry on the menu item it references.
pub fn merge(entry: CartEntryDoc, menu: Option<MenuItemDoc>) -> CartItem {
    let (name, category, recipe, image, price) = match menu {
        Some(m) => (
            Some(m.name),
            Some(m.category),
            Some(m.recipe),
            Some(m.image),
            Some(m.price),
        ),
        None => (None, None, None, None, None),
    };

    CartItem {
        id: entry.id.map(|id| id.to_hex()).unwrap_or_default(),
        email: entry.email,
        menu_id: entry.menu_id,
        name: entry.name.or(name),
        category,
        recipe,
        image: entry.image.or(image),
        price: entry.price.or(price),
    }
}

impl CartEntryDoc {
    pub async fn create(db: &Arc<Mongo>, body: CartEntryBody) -> ServerResult<InsertOneResult> {
        let entry = CartEntryDoc::from(body);
        Ok(db.carts().insert_one(&entry).await?)
    }

    pub async fn list_for_owner(db: &Arc<Mongo>, email: &str) -> ServerResult<Vec<CartEntryDoc>> {
        let cursor = db.carts().find(doc! { "email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn delete(db: &Arc<Mongo>, id: &ObjectId) -> ServerResult<DeleteResult> {
        Ok(db.carts().delete_one(doc! { "_id": id }).await?)
    }

    /// The menu item this entry points at. A reference that is not an ObjectId
    /// cannot match anything and resolves to `None`, same as a deleted item.
    async fn referenced_menu_item(&self, db: &Arc<Mongo>) -> ServerResult<Option<MenuItemDoc>> {
        match ObjectId::parse_str(&self.menu_id) {
            Ok(id) => MenuItemDoc::find_by_id(db, &id).await,
            Err(_) => Ok(None),
        }
    }

    /// Cart of `email`, each entry merged with its menu item. The lookups run
    /// concurrently; output order follows the cart query and any failed lookup
    /// fails the whole listing.
    pub async fn list_enriched(db: &Arc<Mongo>, email: &str) -> ServerResult<Vec<CartItem>> {
        let entries = Self::list_for_owner(db, email).await?;

        let menus = try_join_all(entries.iter().map(|e| e.referenced_menu_item(db))).await?;

        Ok(entries
            .into_iter()
            .zip(menus)
            .map(|(entry, menu)| merge(entry, menu))
            .collect())
    }
}
