use std::sync::Arc;

use bistro_shared::menu::{MenuItem, MenuItemBody};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOptions, UpdateOptions},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};
use serde::{Deserialize, Serialize};

use crate::{db::Mongo, response::ServerResult};

/// Number of items on the landing page.
pub const FEATURED_LIMIT: i64 = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: String,
    pub image: String,
}

impl From<MenuItemDoc> for MenuItem {
    fn from(doc: MenuItemDoc) -> Self {
        MenuItem {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            category: doc.category,
            price: doc.price,
            recipe: doc.recipe,
            image: doc.image,
        }
    }
}

impl From<MenuItemBody> for MenuItemDoc {
    fn from(body: MenuItemBody) -> Self {
        MenuItemDoc {
            id: None,
            name: body.name,
            category: body.category,
            price: body.price,
            recipe: body.recipe,
            image: body.image,
        }
    }
}

pub fn from_vec(docs: Vec<MenuItemDoc>) -> Vec<MenuItem> {
    docs.into_iter().map(Into::into).collect()
}

impl MenuItemDoc {
    pub async fn featured(db: &Arc<Mongo>) -> ServerResult<Vec<MenuItemDoc>> {
        let options = FindOptions::builder().limit(Some(FEATURED_LIMIT)).build();
        let cursor = db.menu().find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn list_all(db: &Arc<Mongo>) -> ServerResult<Vec<MenuItemDoc>> {
        let cursor = db.menu().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(db: &Arc<Mongo>, id: &ObjectId) -> ServerResult<Option<MenuItemDoc>> {
        Ok(db.menu().find_one(doc! { "_id": id }).await?)
    }

    pub async fn create(db: &Arc<Mongo>, body: MenuItemBody) -> ServerResult<InsertOneResult> {
        let item = MenuItemDoc::from(body);
        Ok(db.menu().insert_one(&item).await?)
    }

    /// Replaces the fields of the item with `id`, inserting it under that id when it
    /// does not exist yet.
    pub async fn upsert(
        db: &Arc<Mongo>,
        id: &ObjectId,
        body: MenuItemBody,
    ) -> ServerResult<UpdateResult> {
        let update = doc! {
            "$set": {
                "name": body.name,
                "category": body.category,
                "price": body.price,
                "recipe": body.recipe,
                "image": body.image,
            }
        };
        let options = UpdateOptions::builder().upsert(true).build();
        Ok(db
            .menu()
            .update_one(doc! { "_id": id }, update)
            .with_options(options)
            .await?)
    }

    pub async fn delete(db: &Arc<Mongo>, id: &ObjectId) -> ServerResult<DeleteResult> {
        Ok(db.menu().delete_one(doc! { "_id": id }).await?)
    }
}
