use crate::{db::Mongo, response::ServerResult};
use bistro_shared::{
    results::{AlreadyAdded, CreateUserResult},
    roles::Role,
    users::{CreateUserBody, User},
};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    results::{DeleteResult, UpdateResult},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::insert_result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(default)]
    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

impl From<UserDoc> for User {
    fn from(doc: UserDoc) -> Self {
        User {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: doc.email,
            name: doc.name,
            role: doc.role,
        }
    }
}

impl UserDoc {
    pub async fn find_by_email(db: &Arc<Mongo>, email: &str) -> ServerResult<Option<UserDoc>> {
        Ok(db.users().find_one(doc! { "email": email }).await?)
    }

    /// Registers a user on first sign-in. Signing in again with the same email
    /// leaves the stored user untouched.
    pub async fn create(db: &Arc<Mongo>, body: CreateUserBody) -> ServerResult<CreateUserResult> {
        if Self::find_by_email(db, &body.email).await?.is_some() {
            debug!("user {} already registered", body.email);
            return Ok(CreateUserResult::AlreadyAdded(AlreadyAdded::new()));
        }

        let user = UserDoc {
            id: None,
            email: body.email,
            name: body.name,
            photo: body.photo,
            role: Role::default(),
            created_at: Some(DateTime::now()),
        };
        let res = db.users().insert_one(&user).await?;
        Ok(CreateUserResult::Inserted(insert_result(res)))
    }

    pub async fn list_all(db: &Arc<Mongo>) -> ServerResult<Vec<User>> {
        let cursor = db.users().find(doc! {}).await?;
        let docs: Vec<UserDoc> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    pub async fn delete(db: &Arc<Mongo>, id: &ObjectId) -> ServerResult<DeleteResult> {
        Ok(db.users().delete_one(doc! { "_id": id }).await?)
    }

    pub async fn make_admin(db: &Arc<Mongo>, id: &ObjectId) -> ServerResult<UpdateResult> {
        Ok(db
            .users()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "role": Role::Admin.to_string() } },
            )
            .await?)
    }

    /// Unknown emails are not admins.
    pub async fn is_admin(db: &Arc<Mongo>, email: &str) -> ServerResult<bool> {
        Ok(Self::find_by_email(db, email)
            .await?
            .is_some_and(|user| user.role.is_admin()))
    }
}
