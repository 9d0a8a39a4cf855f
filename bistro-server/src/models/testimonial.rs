use std::sync::Arc;

use bistro_shared::testimonial::Testimonial;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::{db::Mongo, response::ServerResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,
    pub details: String,
    pub rating: f64,
}

impl From<TestimonialDoc> for Testimonial {
    fn from(doc: TestimonialDoc) -> Self {
        Testimonial {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            details: doc.details,
            rating: doc.rating,
        }
    }
}

impl TestimonialDoc {
    pub async fn list_all(db: &Arc<Mongo>) -> ServerResult<Vec<Testimonial>> {
        let cursor = db.testimonials().find(doc! {}).await?;
        let docs: Vec<TestimonialDoc> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }
}
