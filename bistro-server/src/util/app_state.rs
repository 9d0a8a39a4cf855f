use std::sync::Arc;

use crate::{config::AppConfig, db::Mongo};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mongo>,
    pub config: Arc<AppConfig>,
}
