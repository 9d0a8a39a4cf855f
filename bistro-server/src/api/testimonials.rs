use axum::extract::State;
use axum::{Router, routing::get};
use bistro_shared::testimonial::Testimonial;

use crate::models::testimonial::TestimonialDoc;
use crate::response::{ServerAppResult, ServerResponse};
use crate::util::app_state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new().route("/testimonials", get(list_testimonials))
}

async fn list_testimonials(State(state): State<AppState>) -> ServerAppResult<Vec<Testimonial>> {
    let testimonials = TestimonialDoc::list_all(&state.db).await?;
    Ok(ServerResponse::builder().body(testimonials).ok().build())
}
