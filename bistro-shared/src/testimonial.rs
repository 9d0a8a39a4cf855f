use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    /// Author.
    pub name: String,
    /// Message.
    pub details: String,
    pub rating: f64,
}
