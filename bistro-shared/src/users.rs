use serde::{Deserialize, Serialize};

use crate::roles::Role;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Body of `POST /users`. Only `email` is required; sign-in providers also send a
/// display name and photo which are kept when present.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateUserBody {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Answer of `GET /users/admin/{email}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct AdminCheck {
    pub admin: bool,
}
