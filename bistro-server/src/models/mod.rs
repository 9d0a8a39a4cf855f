pub mod cart;
pub mod menu;
pub mod testimonial;
pub mod user;

use bistro_shared::results::{DeleteResult, InsertResult, UpdateResult};
use mongodb::{bson::Bson, results};

/// Renders a stored `_id` the way clients see it: ObjectIds as hex, anything else
/// as its plain value.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn insert_result(res: results::InsertOneResult) -> InsertResult {
    InsertResult {
        acknowledged: true,
        inserted_id: id_to_string(&res.inserted_id),
    }
}

pub fn update_result(res: results::UpdateResult) -> UpdateResult {
    UpdateResult {
        acknowledged: true,
        matched_count: res.matched_count,
        modified_count: res.modified_count,
        upserted_id: res.upserted_id.as_ref().map(id_to_string),
    }
}

pub fn delete_result(res: results::DeleteResult) -> DeleteResult {
    DeleteResult {
        acknowledged: true,
        deleted_count: res.deleted_count,
    }
}
