use serde::{Deserialize, Serialize};

/// Body of `POST /carts`. The display fields are copied from the menu item by the
/// client when the entry is added.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CartEntryBody {
    pub email: String,
    pub menu_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A cart entry merged with the menu item it points at.
///
/// Menu fields are the base and any field stored on the cart entry wins. When the
/// menu item no longer exists the menu-only fields stay empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub menu_id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub recipe: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

/// Query of `GET /carts`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartQuery {
    pub email: String,
}
