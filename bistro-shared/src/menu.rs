use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Short description of the dish.
    pub recipe: String,
    pub image: String,
}

/// Body of `POST /menu` and `PUT /menu/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MenuItemBody {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: String,
    pub image: String,
}
