//! Write acknowledgements returned by the mutating routes.
//!
//! These keep the field names MongoDB drivers use so that clients can tell an insert
//! acknowledgement apart from a stored document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Answer of `POST /users` when the email is already registered.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyAdded {
    pub message: String,
    pub inserted_id: Option<String>,
}

impl AlreadyAdded {
    pub fn new() -> Self {
        Self {
            message: "user already added".to_string(),
            inserted_id: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CreateUserResult {
    Inserted(InsertResult),
    AlreadyAdded(AlreadyAdded),
}

/// `{ "success": true }` answer of the cookie routes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Success {
    pub success: bool,
}
